//! CLI subcommand implementations.

pub mod feed;
pub mod feed_list;

use anyhow::Result;
use awin_api::Client;
use clap::Args;

/// Connection options shared by every subcommand.
#[derive(Args)]
pub struct ClientArgs {
    /// Awin product data API key (Toolbox > Create-a-Feed)
    #[arg(long = "apikey", env = "AWIN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Override the API base URL
    #[arg(long, env = "AWIN_BASE_URL")]
    pub base_url: Option<String>,
}

impl ClientArgs {
    pub fn client(&self) -> Result<Client> {
        let client = match &self.base_url {
            Some(url) => Client::with_base_url(url, &self.api_key)?,
            None => Client::new(&self.api_key)?,
        };
        Ok(client)
    }
}
