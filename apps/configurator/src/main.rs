use anyhow::{Context, Result};
use clap::Parser;
use client_core::{ConfigureOutcome, Configurator, PriceDisplay};
use shared::protocol::ConfigurationRequest;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod demo_scene;

use config::{load_settings, prepare_endpoint};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the endpoint from configurator.toml and the environment.
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long, default_value = "original")]
    seat_color: String,
    #[arg(long, default_value_t = 4)]
    leg_style: i64,
}

struct StdoutPriceDisplay;

impl PriceDisplay for StdoutPriceDisplay {
    fn set_text(&mut self, text: String) {
        println!("{text}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings();
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let endpoint = prepare_endpoint(args.endpoint.as_deref().unwrap_or(&settings.endpoint))?;
    info!("configurator: using endpoint={endpoint}");

    let configurator = Configurator::new(endpoint, demo_scene::chair(), StdoutPriceDisplay);
    let selection = ConfigurationRequest::new(args.seat_color, args.leg_style);
    let outcome = configurator
        .configure(&selection)
        .await
        .context("configuration round trip failed")?;

    if let ConfigureOutcome::Applied { report, .. } = &outcome {
        for err in &report.skipped {
            println!("skipped: {err}");
        }
    }

    for line in configurator.scene().await.outline() {
        println!("{line}");
    }

    Ok(())
}
