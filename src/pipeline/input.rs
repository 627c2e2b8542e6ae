//! Input Actor: dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to capture quit keys and resize notifications without blocking the
//! engine loop.

use super::messages::InputEvent;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the engine.
    /// * `poll_timeout` - How long to wait for events before checking
    ///   shutdown.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("wordwheel-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if let Some(input_event) = Self::convert_event(&ev) {
                            if sender.send(input_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Map a crossterm event onto the pipeline protocol.
    ///
    /// Everything except quit keys and resizes is ignored: the display
    /// is read-only.
    fn convert_event(event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => {
                // Only process key press events (not release or repeat)
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(InputEvent::Quit)
                    }
                    _ => None,
                }
            }
            Event::Resize(columns, rows) => Some(InputEvent::Resize {
                columns: *columns,
                rows: *rows,
            }),
            _ => None,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(InputActor::convert_event(&event), Some(InputEvent::Quit));
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let event = key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(InputActor::convert_event(&event), None);
    }

    #[test]
    fn test_resize_forwarded() {
        let event = Event::Resize(120, 40);
        assert_eq!(
            InputActor::convert_event(&event),
            Some(InputEvent::Resize {
                columns: 120,
                rows: 40
            })
        );
    }
}
