use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use turtlekit_core::bag::BagReader;

#[derive(Parser)]
#[command(name = "baginfo")]
#[command(about = "Summarize the contents of a bag file")]
struct Cli {
    /// Bag file to inspect
    bag: PathBuf,

    /// List every record
    #[arg(short, long)]
    records: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let reader = BagReader::open(&cli.bag)?;

    println!("{}: {} message(s)", cli.bag.display(), reader.len());
    if let (Some(start), Some(end)) = (reader.start_time(), reader.end_time()) {
        println!("time range: {} .. {}", start, end);
    }
    for info in reader.topics() {
        println!(
            "  {}  {}  {} message(s)",
            info.topic.cyan(),
            info.msg_type,
            info.count
        );
    }

    if cli.records {
        for record in reader.records() {
            println!(
                "{:>10.3}  {}  {}",
                record.time.as_secs_f64(),
                record.topic,
                record.msg_type
            );
        }
    }

    Ok(())
}
