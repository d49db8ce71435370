use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use orcid_api::{reason_phrase, BufferedResponse, HttpError};

use crate::output::{print_http_error, OutputFormat};

#[derive(Args)]
pub struct ClassifyArgs {
    /// HTTP status code of the failed response
    #[arg(long)]
    pub status: u16,

    /// Reason phrase (defaults to the canonical phrase for the status)
    #[arg(long)]
    pub reason: Option<String>,

    /// File holding the response body, or `-` for stdin
    #[arg(long)]
    pub body: Option<PathBuf>,
}

pub fn run(args: &ClassifyArgs, format: &OutputFormat) -> Result<()> {
    let body = match &args.body {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read body from stdin")?;
            buf
        }
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read body from {}", path.display()))?,
        None => Vec::new(),
    };

    let reason = args
        .reason
        .as_deref()
        .unwrap_or_else(|| reason_phrase(args.status));
    let response = BufferedResponse::new(args.status, reason, body);
    let error = HttpError::from_response(&response, None);
    print_http_error(&error, format);
    Ok(())
}
