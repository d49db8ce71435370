use anyhow::{bail, Result};
use clap::Args;
use orcid_api::{Client, Error};
use serde_json::Value;

use crate::output::{print_http_error, print_json, OutputFormat};

#[derive(Args)]
pub struct FetchArgs {
    /// API path, e.g. 0000-0002-1825-0097/record
    pub path: String,

    /// Base URL of the API (falls back to ORCID_API_URL, then the public API)
    #[arg(long)]
    pub base_url: Option<String>,
}

pub async fn run(args: &FetchArgs, format: &OutputFormat) -> Result<()> {
    let client = match args
        .base_url
        .clone()
        .or_else(|| std::env::var("ORCID_API_URL").ok())
    {
        Some(url) => Client::with_base_url(&url),
        None => Client::new(),
    };
    tracing::debug!("Fetching {} from {}", args.path, client.base_url());

    match client.get_json::<Value>(&args.path).await {
        Ok(body) => {
            print_json(&body);
            Ok(())
        }
        Err(Error::Http(e)) => {
            print_http_error(&e, format);
            bail!("request failed with HTTP {} ({})", e.status(), e.kind())
        }
        Err(e) => Err(e.into()),
    }
}
