/*
cargo run --bin build_tvqa_subtitles -- \
    --input          data/tvqa_subtitles.json \
    --output-clip    data/longtvqa/clip_subtitles.json \
    --output-episode data/longtvqa/episode_subtitles.json \
    --episode-with-show-prefix
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tvqa_convert::logging::init_logging;
use tvqa_convert::subtitles::{build_subtitles, BuildSubtitles};

/// Build clip-level and episode-level subtitle JSON files from TVQA subtitles.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input clip-level JSON
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Output clip-level JSON path
    #[arg(long, value_name = "PATH")]
    output_clip: PathBuf,

    /// Output episode-level JSON path
    #[arg(long, value_name = "PATH")]
    output_episode: PathBuf,

    /// Include show abbreviation in episode keys when present
    #[arg(long)]
    episode_with_show_prefix: bool,

    /// Also write a timestamped log file into this directory
    #[arg(long, value_name = "PATH")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging("build_tvqa_subtitles", cli.log_dir.as_deref())?;
    info!(
        "Building subtitles from {:?} (show prefix: {})",
        cli.input, cli.episode_with_show_prefix
    );

    let job = BuildSubtitles {
        input: cli.input,
        output_clip: cli.output_clip,
        output_episode: cli.output_episode,
        episode_with_show_prefix: cli.episode_with_show_prefix,
    };
    let summary = build_subtitles(&job)
        .with_context(|| format!("building subtitles from {}", job.input.display()))?;

    println!("\n=== Subtitle summary ===");
    println!("Clips        : {}", summary.clips);
    println!("Episodes     : {}", summary.episodes);
    println!("Clip JSON    : {:?}", job.output_clip);
    println!("Episode JSON : {:?}", job.output_episode);
    if let Some(path) = log_path {
        println!("Log file     : {:?}", path);
    }
    Ok(())
}
