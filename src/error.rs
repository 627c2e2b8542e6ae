//! Error taxonomy for the wordwheel pipeline.
//!
//! Configuration errors fail fast before the terminal is taken over.
//! Internal-consistency errors are fatal: the engine logs and terminates
//! rather than rendering corrupted output.

use thiserror::Error;

/// Errors surfaced by the wordwheel library.
#[derive(Error, Debug)]
pub enum WordwheelError {
    /// The configured delimiter cannot be compared as a single byte.
    #[error("invalid delimiter {0:?}: must be a single-byte character")]
    InvalidDelimiter(char),

    /// The maximum token length must admit at least one byte.
    #[error("max token length must be at least 1")]
    ZeroTokenLength,

    /// The render interval must be non-zero under the interval policy.
    #[error("render interval must be at least 1ms")]
    ZeroRenderInterval,

    /// An explicit window capacity must hold at least one unit.
    #[error("window capacity must be at least 1")]
    ZeroWindowCapacity,

    /// An explicit top-k must request at least one entry.
    #[error("top-k must be at least 1")]
    ZeroTopK,

    /// A relative frequency left the [0, 1] domain.
    ///
    /// The frequency table guarantees `count <= total`, so this can only
    /// mean an invariant violation upstream.
    #[error("relative frequency {0} outside [0, 1]")]
    FrequencyOutOfRange(f64),

    /// The terminal could not be acquired for full-screen rendering.
    #[error("terminal init failed: {0}")]
    TerminalInit(#[source] std::io::Error),

    /// I/O failure while writing a frame.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WordwheelError>;
