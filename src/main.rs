// src/main.rs
use std::path::PathBuf;
use std::process::exit;
use anyhow::Result;
use clap::Parser;
use tracing::{error, Level};

use reconkit::{App, Config};

#[derive(Parser)]
#[command(name = "reconkit")]
#[command(about = "A sequential recon orchestration toolkit for authorized security testing")]
struct Args {
    /// Target domain to run the pipeline against
    target: Option<String>,

    /// Path to a configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let Some(target) = args.target else {
        println!("Usage: reconkit <target-domain>");
        exit(1);
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            exit(1);
        }
    };

    let app = App::new(config);
    if let Err(e) = app.run(&target).await {
        error!("{}", e);
        exit(1);
    }

    Ok(())
}
