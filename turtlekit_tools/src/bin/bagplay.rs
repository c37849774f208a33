use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

use turtlekit_core::bag::BagReader;
use turtlekit_core::mqtt::{MqttConfig, MqttPublisher};
use turtlekit_core::time::Time;

#[derive(Parser)]
#[command(name = "bagplay")]
#[command(about = "Replay a bag against an MQTT broker, pacing by record timestamps")]
struct Cli {
    /// Bag file to replay
    bag: PathBuf,

    /// Broker URL
    #[arg(short, long, default_value = "mqtt://localhost:1883")]
    broker: String,
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
    let reader = BagReader::open(&cli.bag)?;
    let config = MqttConfig::from_url(&cli.broker)?.with_client_id("bagplay");
    let publisher = MqttPublisher::connect(&config);

    let mut prev: Option<Time> = None;
    for record in reader.records() {
        if let Some(prev) = prev {
            let gap = record.time.duration_since(prev);
            if !gap.is_zero() {
                sleep(gap).await;
            }
        }
        prev = Some(record.time);

        let payload = serde_json::to_string(&record.to_json()?)?;
        tracing::debug!("publish {} on {}", record.msg_type, record.topic);
        publisher.publish(&record.topic, payload).await?;
    }

    println!("replayed {} message(s) from {}", reader.len(), cli.bag.display());

    publisher.disconnect().await?;
    // let the event loop drain the disconnect
    sleep(Duration::from_millis(100)).await;

    Ok(())
}
