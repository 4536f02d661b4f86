//! Rolodex CLI entry point.
//!
//! Binary name: `rolodex`
//!
//! Parses CLI arguments, sets up logging, wires the directory service to the
//! in-memory store and template renderer, then runs one command.

mod cli;
mod state;

use clap::Parser;
use rolodex_observe::tracing_setup::init_tracing;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_format.into(), cli.log_directive())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    // A template that fails to compile aborts here, before any command runs.
    let state = AppState::init(cli.data_dir.clone(), cli.seed.as_deref()).await?;

    match cli.command {
        Commands::Card { id } => cli::user::business_card(&state, &id, cli.json).await?,
        Commands::Duplicate { id } => cli::user::duplicate_user(&state, &id, cli.json).await?,
        Commands::Create {
            id,
            name,
            phone,
            wait_secs,
        } => cli::user::create_user(&state, id, name, phone, wait_secs, cli.json).await?,
    }

    Ok(())
}
