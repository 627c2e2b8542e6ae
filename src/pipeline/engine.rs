//! Engine: coordinator that ties the pipeline's actors together.
//!
//! The engine validates configuration, takes over the terminal, spawns
//! the actors, and runs the scheduling loop that decides when a frame
//! is built and handed to the render thread.

use super::messages::{InputEvent, RenderCommand, StatsEvent};
use super::{IngestActor, InputActor, RenderActor, TickerActor};
use crate::config::{Config, RenderPolicy};
use crate::error::Result;
use crate::frame::{FrameBuilder, Geometry};
use crate::source::ByteSource;
use crate::stats::{SharedStats, Tokenizer};
use crate::terminal::Screen;
use crossbeam_channel::{bounded, never, select, Receiver, Sender};
use std::time::Duration;

/// The main wordwheel engine.
///
/// Owns the shared aggregate and the actor handles; [`Engine::run`] is
/// the scheduling loop. Dropping the engine (normally or on an error
/// path) stops the actors and lets the screen restore the terminal.
pub struct Engine {
    /// Configuration.
    config: Config,
    /// Terminal geometry currently in effect.
    geometry: Geometry,
    /// Shared aggregation state (ingest writes, this loop reads).
    stats: SharedStats,
    /// Pure frame builder.
    builder: FrameBuilder,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Ingest event receiver.
    stats_rx: Receiver<StatsEvent>,
    /// Tick receiver (a never-channel under the eager policy).
    tick_rx: Receiver<()>,
    /// Frame sender; one slot, fed with `try_send`.
    frame_tx: Sender<RenderCommand>,
    /// Actor handles.
    input_actor: Option<InputActor>,
    ingest_actor: Option<IngestActor>,
    render_actor: Option<RenderActor>,
    ticker: Option<TickerActor>,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Validate the configuration, take over the terminal, and spawn
    /// the pipeline actors.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before the terminal is touched,
    /// or a terminal-init error if the screen cannot be acquired.
    pub fn new(config: Config, source: Box<dyn ByteSource>) -> Result<Self> {
        config.validate()?;

        let screen = Screen::new()?;
        let geometry = Screen::geometry()?;

        let window_capacity = config
            .window_capacity
            .unwrap_or_else(|| geometry.window_capacity());
        let stats = SharedStats::new(window_capacity);
        let tokenizer = Tokenizer::new(config.delimiter_byte(), config.max_token_length);

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let (stats_tx, stats_rx) = bounded::<StatsEvent>(8);
        // One slot: a frame built while a draw is in flight is dropped.
        let (frame_tx, frame_rx) = bounded::<RenderCommand>(1);

        let input_actor = InputActor::spawn(input_tx, Duration::from_millis(10));
        let ingest_actor = IngestActor::spawn(source, tokenizer, stats.clone(), stats_tx);
        let render_actor = RenderActor::spawn(screen, frame_rx);
        let ticker = match config.policy {
            RenderPolicy::Interval => Some(TickerActor::spawn(config.render_interval)),
            RenderPolicy::Eager => None,
        };
        let tick_rx = match &ticker {
            Some(t) => t.receiver().clone(),
            None => never(),
        };

        tracing::info!(policy = ?config.policy, ?geometry, "pipeline started");

        Ok(Self {
            config,
            geometry,
            stats,
            builder: FrameBuilder::new(),
            input_rx,
            stats_rx,
            tick_rx,
            frame_tx,
            input_actor: Some(input_actor),
            ingest_actor: Some(ingest_actor),
            render_actor: Some(render_actor),
            ticker,
            running: true,
        })
    }

    /// Terminal geometry currently in effect.
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Run the scheduling loop until quit, source exhaustion, or a
    /// fatal error.
    pub fn run(&mut self) -> Result<()> {
        let input_rx = self.input_rx.clone();
        let stats_rx = self.stats_rx.clone();
        let tick_rx = self.tick_rx.clone();

        while self.running {
            select! {
                recv(input_rx) -> event => match event {
                    Ok(InputEvent::Quit | InputEvent::Shutdown) => self.running = false,
                    Ok(InputEvent::Resize { columns, rows }) => {
                        self.handle_resize(columns, rows)?;
                    }
                    Ok(InputEvent::Error(msg)) => {
                        tracing::warn!("input error: {msg}");
                    }
                    Err(_) => self.running = false,
                },
                recv(stats_rx) -> event => match event {
                    Ok(StatsEvent::Progress) => {
                        if self.config.policy == RenderPolicy::Eager {
                            self.build_and_dispatch()?;
                        }
                    }
                    Ok(StatsEvent::Exhausted) => {
                        // Draw the final state before leaving.
                        self.build_and_dispatch()?;
                        self.running = false;
                    }
                    Ok(StatsEvent::SourceError(msg)) => {
                        tracing::warn!("source error: {msg}");
                        self.running = false;
                    }
                    Err(_) => self.running = false,
                },
                recv(tick_rx) -> tick => {
                    if tick.is_ok() {
                        self.build_and_dispatch()?;
                    }
                },
            }
        }

        self.stop();
        Ok(())
    }

    /// Snapshot, build, and hand the frame to the render thread.
    ///
    /// An internal-consistency failure is fatal: the error is logged
    /// and propagated instead of rendering a corrupted frame.
    fn build_and_dispatch(&mut self) -> Result<()> {
        let top_k = self
            .config
            .top_k
            .unwrap_or_else(|| self.geometry.chart_rows());
        let snapshot = self.stats.snapshot(top_k);
        let frame = self.builder.build(&snapshot, self.geometry).map_err(|e| {
            tracing::error!("frame build failed: {e}");
            e
        })?;

        // Dropped when the previous draw is still in flight.
        let _ = self.frame_tx.try_send(RenderCommand::Frame(frame));
        Ok(())
    }

    /// Apply a terminal resize: new geometry, window capacity tracking,
    /// and an immediate redraw at the new size.
    fn handle_resize(&mut self, columns: u16, rows: u16) -> Result<()> {
        self.geometry = Geometry::new(columns, rows);
        if self.config.window_capacity.is_none() {
            self.stats.set_window_capacity(self.geometry.window_capacity());
        }
        self.build_and_dispatch()
    }

    /// Stop the pipeline and join the actors.
    ///
    /// The screen restores the terminal when the render thread drops
    /// it. Idempotent, so the `Drop` impl can call it after an error
    /// exit from [`Engine::run`].
    fn stop(&mut self) {
        self.running = false;
        if self.render_actor.is_none() {
            // Already stopped.
            return;
        }

        if let Some(actor) = self.ingest_actor.take() {
            // May be parked inside a blocking source read; signal and
            // detach instead of joining.
            actor.shutdown();
            drop(actor);
        }
        if let Some(ticker) = self.ticker.take() {
            ticker.join();
        }
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }
        let _ = self.frame_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.render_actor.take() {
            actor.join();
        }

        tracing::info!("pipeline stopped");
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}
