//! The `feed` subcommand: download products of the given feeds.

use anyhow::Result;
use awin_api::FeedQuery;
use clap::Args;

use super::ClientArgs;
use crate::output::{print_csv, print_json, OutputFormat};

#[derive(Args)]
pub struct FeedArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    /// Feed ids, comma or space separated (e.g. --ids 123,456)
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Two-letter language code
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Include adult content
    #[arg(long)]
    pub adult: bool,
}

impl FeedArgs {
    pub fn query(&self) -> FeedQuery {
        FeedQuery::default()
            .with_feed_ids(&self.ids)
            .with_language(&self.lang)
            .with_adult_content(self.adult)
    }
}

pub async fn run(args: &FeedArgs, format: &OutputFormat) -> Result<()> {
    let client = args.client.client()?;
    let query = args.query();

    tracing::info!("Loading data feed from Awin");
    let entries = client.fetch_feed(&query).await?;
    tracing::info!("Received {} products", entries.len());

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Csv => print_csv(&entries)?,
    }
    Ok(())
}
