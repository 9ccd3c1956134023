//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_season_stats::{
    cli::{Commands, Nba},
    commands::update_stats::{handle_update_stats, UpdateParams},
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Nba::parse();

    match app.command {
        Commands::Update {
            csv_path,
            season,
            delay_ms,
            verbose,
        } => {
            handle_update_stats(UpdateParams {
                csv_path,
                season,
                delay_ms,
                verbose,
            })
            .await?;
        }
    }

    Ok(())
}
