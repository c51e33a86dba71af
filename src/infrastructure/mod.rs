//! Infrastructure layer - store access, credentials and tokens

pub mod auth;
pub mod district;
pub mod logging;
pub mod state;
pub mod storage;
pub mod user;
