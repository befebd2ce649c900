//! The `feedlist` subcommand: list joined and not-joined feeds.

use anyhow::Result;
use clap::Args;

use super::ClientArgs;
use crate::output::{print_csv, print_json, OutputFormat};

#[derive(Args)]
pub struct FeedListArgs {
    #[command(flatten)]
    pub client: ClientArgs,
}

pub async fn run(args: &FeedListArgs, format: &OutputFormat) -> Result<()> {
    let client = args.client.client()?;

    tracing::info!("Loading data feed list from Awin");
    let rows = client.fetch_feed_list().await?;
    tracing::info!("Received {} feeds", rows.len());

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => print_csv(&rows)?,
    }
    Ok(())
}
