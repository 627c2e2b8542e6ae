//! Wordwheel binary: CLI parsing, logging setup, pipeline wiring.
//!
//! The process owns the terminal while running, so log output is only
//! visible when stderr is redirected (`wordwheel 2>wordwheel.log`).

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordwheel::{ByteSource, Config, Engine, RandomLetters, ReaderSource, RenderPolicy};

/// Live terminal visualizer for streaming word-frequency statistics.
#[derive(Debug, Parser)]
#[command(name = "wordwheel", version, about)]
struct Cli {
    /// Input source: `random`, `stdin`, or a file path.
    #[arg(long, default_value = "random")]
    source: String,

    /// Word delimiter character.
    #[arg(long, default_value_t = ' ')]
    delimiter: char,

    /// Maximum token length in bytes; reaching it forces a boundary.
    #[arg(long, default_value_t = 10)]
    max_token_length: usize,

    /// Sliding-window capacity in display units (default: terminal
    /// width minus one).
    #[arg(long)]
    window_capacity: Option<usize>,

    /// Ranked entries to draw (default: 3/4 of terminal rows).
    #[arg(long)]
    top_k: Option<usize>,

    /// Render interval in milliseconds under the timer-driven policy.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Render on every tokenization event instead of the interval
    /// timer. Can saturate the output device on fast sources.
    #[arg(long)]
    eager: bool,

    /// Pacing of the random-letter generator in milliseconds
    /// (0 = unpaced).
    #[arg(long, default_value_t = 1)]
    rate_ms: u64,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            delimiter: self.delimiter,
            max_token_length: self.max_token_length,
            window_capacity: self.window_capacity,
            top_k: self.top_k,
            render_interval: Duration::from_millis(self.interval_ms),
            policy: if self.eager {
                RenderPolicy::Eager
            } else {
                RenderPolicy::Interval
            },
        }
    }

    /// Resolve the `--source` argument into a byte source.
    fn open_source(&self) -> anyhow::Result<Box<dyn ByteSource>> {
        Ok(match self.source.as_str() {
            "random" => Box::new(RandomLetters::new(Duration::from_millis(self.rate_ms))),
            "stdin" => Box::new(ReaderSource::new(io::stdin())),
            path => Box::new(ReaderSource::new(
                File::open(path).with_context(|| format!("cannot open source file {path}"))?,
            )),
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordwheel=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let source = cli.open_source()?;
    let mut engine = Engine::new(cli.config(), source).context("failed to start pipeline")?;
    engine.run().context("pipeline failed")?;
    Ok(())
}
