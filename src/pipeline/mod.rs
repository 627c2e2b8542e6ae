//! Actor layer: message-passing concurrency for the pipeline.
//!
//! This module implements a simple actor system using crossbeam
//! channels:
//! - **Input Actor**: Polls terminal events, forwards quit/resize
//! - **Ingest Actor**: Advances the byte source, feeds the tokenizer,
//!   mutates the shared aggregate (the single writer)
//! - **Ticker Actor**: Emits render ticks under the interval policy
//! - **Render Actor**: Owns the renderer, draws pre-built frames
//! - **Engine**: Coordinates between actors and schedules frame builds
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    chunks     ┌──────────────┐
//! │  ByteSource  │ ────────────▶ │ Ingest Thread│──▶ SharedStats
//! └──────────────┘               └──────┬───────┘        │
//!                                       │ StatsEvent     │ snapshot
//! ┌──────────────┐   InputEvent   ┌─────▼────────┐       │
//! │ Input Thread │ ─────────────▶ │              │ ◀─────┘
//! └──────────────┘                │    Engine    │
//! ┌──────────────┐     Tick      │              │
//! │ Ticker Thread│ ────────────▶ │              │
//! └──────────────┘                └─────┬────────┘
//!                                       │ RenderCommand (bounded(1))
//!                                 ┌─────▼────────┐
//!                                 │ Render Thread│──▶ terminal
//!                                 └──────────────┘
//! ```

mod engine;
mod ingest;
mod input;
mod messages;
mod render;
mod ticker;

pub use engine::Engine;
pub use ingest::IngestActor;
pub use input::InputActor;
pub use messages::{InputEvent, RenderCommand, StatsEvent};
pub use render::RenderActor;
pub use ticker::TickerActor;
