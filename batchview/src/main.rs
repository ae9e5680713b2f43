use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use batchview_api_types::{enrich, BatchRecord};
use batchview_charts::{summary_text, ChartOptions};
use batchview_charts_html::render_chart;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of batch records
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the rendered SVG
    #[arg(short, long, default_value = "batch-availability.svg")]
    output: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 540)]
    height: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("couldn't read {}", args.input.display()))?;
    let records: Vec<BatchRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("couldn't parse {}", args.input.display()))?;
    info!("loaded {} batches from {}", records.len(), args.input.display());

    let batches = enrich(&records)?;
    let svg = render_chart(&batches, ChartOptions::default(), (args.width, args.height))?;
    fs::write(&args.output, svg)
        .with_context(|| format!("couldn't write {}", args.output.display()))?;
    info!("wrote chart to {}", args.output.display());

    for line in summary_text(&batches).lines() {
        info!("{line}");
    }

    Ok(())
}
