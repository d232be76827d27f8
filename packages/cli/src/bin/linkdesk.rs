use clap::{Parser, Subcommand};
use colored::*;
use std::process;

use linkdesk_api::links_handlers::ClassifyResponse;
use linkdesk_cli::classify::{render_text_report, render_url_report};
use linkdesk_links::{classify_text, classify_url};

#[derive(Parser)]
#[command(name = "linkdesk")]
#[command(about = "Linkdesk - AI settings service and link classifier")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(
            long,
            value_parser = clap::value_parser!(u16).range(1..),
            help = "Port to listen on (overrides PORT)"
        )]
        port: Option<u16>,
    },
    /// Run the link classifiers on a URL and/or link text
    Classify {
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { port } => {
            linkdesk_cli::init_tracing();
            linkdesk_cli::run_server(port).await
        }
        Commands::Classify { url, text, json } => {
            if url.is_none() && text.is_none() {
                anyhow::bail!("Provide --url or --text");
            }

            let response = ClassifyResponse {
                url: url.as_deref().map(classify_url),
                text: text.as_deref().map(classify_text),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            if let Some(report) = &response.url {
                print!("{}", render_url_report(report));
            }
            if let Some(report) = &response.text {
                print!("{}", render_text_report(report));
            }
            Ok(())
        }
    }
}
