/*
cargo run --bin convert_tvqa_qa -- \
    --input  data/tvqa_train.jsonl \
    --output data/longtvqa/qa_train.json \
    --log-dir logs
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tvqa_convert::logging::init_logging;
use tvqa_convert::qa::{convert_qa, ConvertQa};

/// Convert TVQA JSONL QA files to LongTVQA-style JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input JSONL file
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Output JSON file
    #[arg(long, value_name = "PATH")]
    output: PathBuf,

    /// Include show abbreviation in episode_name when present
    #[arg(long)]
    episode_with_show_prefix: bool,

    /// Also write a timestamped log file into this directory
    #[arg(long, value_name = "PATH")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging("convert_tvqa_qa", cli.log_dir.as_deref())?;
    info!(
        "Converting QA records from {:?} (show prefix: {})",
        cli.input, cli.episode_with_show_prefix
    );

    let job = ConvertQa {
        input: cli.input,
        output: cli.output,
        episode_with_show_prefix: cli.episode_with_show_prefix,
    };
    let summary = convert_qa(&job)
        .with_context(|| format!("converting {}", job.input.display()))?;

    println!("\n=== QA summary ===");
    println!("Records      : {}", summary.records);
    println!("With answer  : {}", summary.answered);
    println!("Output JSON  : {:?}", job.output);
    if let Some(path) = log_path {
        println!("Log file     : {:?}", path);
    }
    Ok(())
}
