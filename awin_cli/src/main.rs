mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "awin")]
#[command(about = "Fetch feed lists and product feeds from the Awin product data API")]
struct Cli {
    /// Output format: json or csv
    #[arg(long, default_value = "json", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the feeds available to the publisher
    #[command(name = "feedlist")]
    FeedList(commands::feed_list::FeedListArgs),
    /// Download the products of one or more feeds
    Feed(commands::feed::FeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("awin=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Json,
    };

    match &cli.command {
        Commands::FeedList(args) => commands::feed_list::run(args, &format).await?,
        Commands::Feed(args) => commands::feed::run(args, &format).await?,
    }

    Ok(())
}
