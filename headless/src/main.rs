use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_core::Config;
use pointer::PointerPattern;
use runner::{run, RunOptions};

mod pointer;
mod replay;
mod runner;

#[derive(Parser)]
#[command(about = "Run Pong without a screen")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a game, optionally recording every frame
    Run {
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3000)]
        ticks: u64,
        /// JSON config overriding the defaults
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write a recording to this file
        #[arg(long)]
        record: Option<PathBuf>,
        /// Pace ticks at the configured rate
        #[arg(long)]
        realtime: bool,
        /// How the simulated pointer moves
        #[arg(long, value_enum, default_value_t = PointerPattern::Sweep)]
        pointer: PointerPattern,
    },
    /// Summarise a recording
    Inspect { file: PathBuf },
    /// Re-simulate a recording and check every frame matches
    Verify { file: PathBuf },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_json(&json).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::new(),
    };
    config.validate()?;
    Ok(config)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            ticks,
            config,
            record,
            realtime,
            pointer,
        } => {
            let config = load_config(config.as_deref())?;
            let options = RunOptions {
                ticks,
                realtime,
                pointer,
            };
            let report = match record {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let (report, _out) = run(config, options, BufWriter::new(file)).await?;
                    tracing::info!("recording written to {}", path.display());
                    report
                }
                None => run(config, options, std::io::sink()).await?.0,
            };
            println!(
                "{} ticks, {} frames, score {} - {}",
                report.ticks, report.frames, report.score.user, report.score.cpu
            );
        }
        Command::Inspect { file } => {
            let summary = replay::inspect(open(&file)?)?;
            println!(
                "{} frames, {} inputs, last tick {}, score {} - {}",
                summary.frames,
                summary.inputs,
                summary.last_tick,
                summary.score.user,
                summary.score.cpu
            );
        }
        Command::Verify { file } => {
            let summary = replay::verify(open(&file)?)?;
            println!(
                "ok: {} frames replayed identically, score {} - {}",
                summary.frames, summary.score.user, summary.score.cpu
            );
        }
    }

    Ok(())
}
