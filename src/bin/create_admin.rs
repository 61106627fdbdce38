//! One-shot CLI for seeding admin accounts.
//!
//! Usage: create-admin <username> <password>

use anyhow::{bail, Context, Result};
use clap::Parser;

use kala_api::auth::hash_password;
use kala_api::database::Database;
use kala_api::models::admin;

#[derive(Parser, Debug)]
#[command(name = "create-admin", about = "Create an admin account")]
struct Args {
    /// Login name, up to 50 characters
    username: String,

    /// Plaintext password, hashed before storage
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let username = args.username.trim();
    if username.is_empty() || username.len() > 50 {
        bail!("Username must be between 1 and 50 characters.");
    }
    if args.password.len() < 8 {
        bail!("Password must be at least 8 characters long.");
    }

    let pool = Database::pool()
        .await
        .context("failed to connect to database")?;

    let password_hash = hash_password(&args.password).context("failed to hash password")?;

    match admin::create(pool, username, &password_hash).await {
        Ok(admin_id) => {
            println!("Admin '{}' created (id {}).", username, admin_id);
            Ok(())
        }
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            bail!("Username '{}' already exists.", username)
        }
        Err(e) => Err(e).context("failed to insert admin"),
    }
}
