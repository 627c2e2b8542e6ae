//! # Wordwheel
//!
//! A live terminal visualizer for streaming word-frequency statistics.
//!
//! Wordwheel ingests an unbounded byte stream, tokenizes it into words,
//! maintains a running frequency distribution, and continuously renders
//! a terminal frame combining a sliding window of the most recent raw
//! input with a ranked bar chart of the most frequent words.
//!
//! ## Core Concepts
//!
//! - **Single-writer aggregation**: one ingest thread mutates the
//!   frequency table and sliding window; the render path reads owned
//!   snapshots copied out under a brief lock
//! - **Decoupled scheduling**: the draw rate is bounded by an interval
//!   ticker (or an eager per-token policy), independent of input rate
//! - **Droppable frames**: a render still in flight drops the next
//!   frame; the most recent state always wins
//! - **Actor model**: isolated threads for input, ingestion, timing,
//!   and rendering
//!
//! ## Example
//!
//! ```rust,ignore
//! use wordwheel::{Config, Engine, RandomLetters};
//! use std::time::Duration;
//!
//! let source = Box::new(RandomLetters::new(Duration::from_millis(1)));
//! let mut engine = Engine::new(Config::default(), source)?;
//! engine.run()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod source;
pub mod stats;
pub mod terminal;

// Re-exports for convenience
pub use config::{Config, RenderPolicy};
pub use error::{Result, WordwheelError};
pub use frame::{FrameBuilder, Geometry};
pub use pipeline::Engine;
pub use source::{ByteSource, RandomLetters, ReaderSource};
pub use stats::{
    Counters, FrameSnapshot, FrequencyTable, RankedEntry, SharedStats, SlidingWindow, Tokenizer,
};
pub use terminal::{Renderer, Screen};
