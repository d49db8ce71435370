mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "orcid")]
#[command(about = "Inspect ORCID API failures")]
struct Cli {
    /// Output format: text or json
    #[arg(long, default_value = "text", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a failed response from its status, reason and body
    Classify(commands::classify::ClassifyArgs),
    /// Fetch a path from the public API
    Fetch(commands::fetch::FetchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orcid=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    match &cli.command {
        Commands::Classify(args) => commands::classify::run(args, &format)?,
        Commands::Fetch(args) => commands::fetch::run(args, &format).await?,
    }

    Ok(())
}
