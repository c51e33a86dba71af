//! CLI module for the COVID-19 Portal API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `hash-password`: produce a password hash for seeding the user table

pub mod hash_password;
pub mod serve;

use clap::{Parser, Subcommand};

/// COVID-19 Portal API - states, districts and case statistics
#[derive(Parser)]
#[command(name = "covid19-portal-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Print the stored form of a password
    HashPassword(hash_password::HashPasswordArgs),
}
