mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "mdcal")]
#[command(about = "Convert a markdown event list into iCal and HTML calendars", version)]
struct Cli {
    /// Input markdown file
    input: PathBuf,

    /// Output base name, without extension (defaults to the input file stem)
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Generate only the iCal output
    #[arg(long, conflicts_with = "html_only")]
    ical_only: bool,

    /// Generate only the HTML output
    #[arg(long)]
    html_only: bool,

    /// Also rebuild index.html listing all generated calendars
    #[arg(long)]
    generate_index: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GlobalConfig::load()?;

    let outputs = commands::convert::run(
        &cli.input,
        cli.output.as_deref(),
        cli.ical_only,
        cli.html_only,
        &config,
    )?;

    if cli.generate_index {
        commands::index::run(&outputs.directory, &config)?;
    }

    Ok(())
}
