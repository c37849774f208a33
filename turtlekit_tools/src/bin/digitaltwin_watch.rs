use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use turtlekit_core::mqtt::{self, MqttConfig, DEFAULT_HOST, DEFAULT_PORT};
use turtlekit_tools::watch;

/// Topic the watcher is pinned to
const TOPIC: &str = "digitaltwin";

#[derive(Parser)]
#[command(name = "digitaltwin_watch")]
#[command(about = "Print every message published on the digitaltwin topic")]
struct Cli {
    /// Broker host
    #[arg(default_value = DEFAULT_HOST)]
    host: String,

    /// Broker port
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = MqttConfig::new(&cli.host, cli.port).with_client_id("digitaltwin_watch");

    mqtt::subscribe_loop(&config, TOPIC, |topic, payload| {
        println!("{}", watch::render_publish(topic, payload));
    })
    .await?;

    Ok(())
}
