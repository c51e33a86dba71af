//! API layer - HTTP endpoints and middleware

pub mod auth;
pub mod districts;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod states;
pub mod types;

pub use middleware::RequireToken;
pub use router::create_router;
pub use state::AppState;
