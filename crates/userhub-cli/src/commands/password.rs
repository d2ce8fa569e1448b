//! Produce password hashes for provisioning identities out of band.

use clap::Args;

use userhub_auth::password::PasswordHasher;
use userhub_core::config::AppConfig;
use userhub_core::error::AppError;

/// Arguments for the hash-password command
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Plaintext password to hash
    pub password: String,
}

/// Execute the hash-password command
pub fn execute(args: &HashPasswordArgs, config: &AppConfig) -> Result<(), AppError> {
    let hasher = PasswordHasher::new(&config.auth.password)?;
    let hash = hasher.hash_password(&args.password)?;
    println!("{hash}");
    Ok(())
}
