//! Ticker Actor: dedicated thread generating render ticks.
//!
//! Under the interval policy this is the render throttle: arrivals only
//! mutate state, and frames are rebuilt when a tick fires, bounding the
//! draw rate independent of the input rate.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Ticker actor that emits at a fixed interval.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<()>,
}

impl TickerActor {
    /// Spawn a ticker with the given interval.
    ///
    /// The tick channel holds at most two entries and is fed with
    /// `try_send`: a consumer still busy with the previous frame drops
    /// ticks instead of queuing them.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("wordwheel-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// Get a reference to the tick receiver for `select!` loops.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<()> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(tick_tx: &Sender<()>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let mut next_tick = Instant::now() + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                // Non-blocking send: a slow consumer drops this tick.
                let _ = tick_tx.try_send(());
                next_tick += interval;

                // When behind schedule, resync instead of bursting.
                if next_tick < now {
                    next_tick = now + interval;
                }
            } else {
                let sleep_duration = next_tick - now;
                thread::sleep(sleep_duration.min(Duration::from_millis(1)));
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
