//! Users service database tooling
//!
//! Usage:
//!   users-service            - Show the resolved database configuration
//!   users-service ping       - Open a session and run `SELECT 1`

mod bootstrap;
mod tracing_setup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cna_db::database::config::DATABASE_URL_KEY;
use cna_db::sea_orm::ConnectionTrait;
use cna_db::{Config, Database, Environment};

#[derive(Parser)]
#[command(name = "users-service")]
#[command(about = "Users service database configuration")]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Directory holding the .env files
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved database configuration (default)
    Config,
    /// Check that the database answers
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    let env = Config::init(&cli.project_root).context("invalid database environment")?;
    let db = bootstrap::register()
        .await
        .context("failed to initialize database")?;

    match cli.command {
        None | Some(Commands::Config) => show_config(&db, &env),
        Some(Commands::Ping) => ping(&db).await?,
    }

    Ok(())
}

fn show_config(db: &Database, env: &Environment) {
    let config = db.config();
    let source = if std::env::var_os(DATABASE_URL_KEY).is_some() {
        DATABASE_URL_KEY.to_string()
    } else {
        format!("{} profile default", config.profile)
    };

    println!("environment: {}", env);
    println!("profile:     {}", config.profile);
    println!("url:         {}", config.redacted_url());
    println!("source:      {}", source);
    println!("backend:     {:?}", db.engine().backend());
    println!("echo:        {}", config.echo);
}

async fn ping(db: &Database) -> Result<()> {
    let session = db.sessions().begin().await?;
    session
        .execute_unprepared("SELECT 1")
        .await
        .context("ping query failed")?;
    session.commit().await?;

    println!("database at {} is reachable", db.config().redacted_url());
    Ok(())
}
