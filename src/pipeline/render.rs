//! Render Actor: dedicated thread that owns the renderer.
//!
//! Frames arrive on a bounded(1) channel fed with `try_send`: a frame
//! built while the previous draw is still in flight is dropped rather
//! than queued, so the most recent state always wins and the output
//! device is never flooded.

use super::messages::RenderCommand;
use crate::terminal::Renderer;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Render actor handle.
pub struct RenderActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
}

impl RenderActor {
    /// Spawn the render thread around a renderer implementation.
    ///
    /// The renderer moves into the thread; for the crossterm screen
    /// that means terminal state is restored when this thread drops it.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn<R: Renderer + 'static>(mut renderer: R, receiver: Receiver<RenderCommand>) -> Self {
        let handle = thread::Builder::new()
            .name("wordwheel-render".to_string())
            .spawn(move || {
                Self::run_loop(&mut renderer, &receiver);
            })
            .expect("Failed to spawn render thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the render thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main render loop.
    fn run_loop(renderer: &mut dyn Renderer, receiver: &Receiver<RenderCommand>) {
        loop {
            match receiver.recv_timeout(Duration::from_millis(100)) {
                Ok(RenderCommand::Frame(frame)) => {
                    if let Err(e) = renderer.render(&frame) {
                        tracing::error!("render failed: {e}");
                        break;
                    }
                }
                Ok(RenderCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {
                    // Idle; loop again so a dropped sender is noticed.
                }
            }
        }
    }
}
