//! Hash-password command - there is no registration endpoint, so user rows
//! are seeded by hand with the output of this command

use clap::Args;

use crate::infrastructure::user::{Argon2Hasher, PasswordHasher};

/// Arguments for the hash-password command
#[derive(Args, Clone)]
pub struct HashPasswordArgs {
    /// Plaintext password to hash
    pub password: String,
}

pub fn run(args: HashPasswordArgs) -> anyhow::Result<()> {
    let hash = Argon2Hasher::new().hash(&args.password)?;
    println!("{}", hash);

    Ok(())
}
