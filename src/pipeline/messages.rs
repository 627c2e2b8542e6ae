//! Message types for actor communication.
//!
//! These enums define the protocol between the pipeline's threads.

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to quit (`q`, `Esc`, or `Ctrl-C`).
    Quit,

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        columns: u16,
        /// New height in rows.
        rows: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

/// Events from the ingest thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsEvent {
    /// At least one token was completed since the last notification.
    ///
    /// Sent with `try_send` so a busy engine simply misses it; the next
    /// snapshot carries the state regardless. Only the eager policy
    /// renders on it.
    Progress,

    /// The source reached end of stream (normal termination, not an
    /// error).
    Exhausted,

    /// The source failed mid-stream.
    SourceError(String),
}

/// Commands accepted by the render thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Draw a pre-built frame, replacing the previous one.
    Frame(String),

    /// Shut the render thread down.
    Shutdown,
}
