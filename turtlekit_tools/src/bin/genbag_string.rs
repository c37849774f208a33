use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use turtlekit_tools::genbag;

#[derive(Parser)]
#[command(name = "genbag_string")]
#[command(about = "Write the canned text-objective bag for the turtle demo")]
struct Cli {
    /// Output bag path
    #[arg(short = 'o', long = "output", default_value = "./objective_string.bag")]
    output: PathBuf,
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
    let written = genbag::write_string_objective(&cli.output)?;
    println!("wrote {} message(s) to {}", written, cli.output.display());
    Ok(())
}
