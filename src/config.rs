//! Runtime configuration for the aggregation pipeline.

use crate::error::{Result, WordwheelError};
use std::time::Duration;

/// When the scheduler rebuilds and pushes a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Rebuild and render on every tokenization event.
    ///
    /// Correct, but can saturate the output device when the source is
    /// fast; prefer [`RenderPolicy::Interval`] for high-throughput input.
    Eager,
    /// Rebuild and render on a fixed interval; arrivals only mutate
    /// state and never trigger a render directly.
    Interval,
}

/// Configuration for the aggregation pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token delimiter (single-byte character).
    pub delimiter: char,
    /// Maximum token length in bytes; reaching it forces a boundary.
    pub max_token_length: usize,
    /// Sliding-window capacity; `None` tracks `columns - 1`.
    pub window_capacity: Option<usize>,
    /// Ranked entries to draw; `None` tracks 3/4 of terminal rows.
    pub top_k: Option<usize>,
    /// Tick interval under [`RenderPolicy::Interval`].
    pub render_interval: Duration,
    /// Render scheduling policy.
    pub policy: RenderPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: ' ',
            max_token_length: 10,
            window_capacity: None,
            top_k: None,
            render_interval: Duration::from_millis(100),
            policy: RenderPolicy::Interval,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// Called before any terminal takeover so a bad configuration never
    /// leaves the terminal in an altered state.
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(WordwheelError::InvalidDelimiter(self.delimiter));
        }
        if self.max_token_length == 0 {
            return Err(WordwheelError::ZeroTokenLength);
        }
        if self.policy == RenderPolicy::Interval && self.render_interval < Duration::from_millis(1)
        {
            return Err(WordwheelError::ZeroRenderInterval);
        }
        if self.window_capacity == Some(0) {
            return Err(WordwheelError::ZeroWindowCapacity);
        }
        if self.top_k == Some(0) {
            return Err(WordwheelError::ZeroTopK);
        }
        Ok(())
    }

    /// The delimiter as the byte the tokenizer compares against.
    ///
    /// Only meaningful after [`Config::validate`] has accepted the
    /// delimiter as ASCII.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_multibyte_delimiter_rejected() {
        let config = Config {
            delimiter: 'é',
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WordwheelError::InvalidDelimiter('é'))
        ));
    }

    #[test]
    fn test_zero_token_length_rejected() {
        let config = Config {
            max_token_length: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WordwheelError::ZeroTokenLength)
        ));
    }

    #[test]
    fn test_zero_interval_rejected_for_interval_policy() {
        let config = Config {
            render_interval: Duration::ZERO,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WordwheelError::ZeroRenderInterval)
        ));
    }

    #[test]
    fn test_zero_interval_allowed_for_eager_policy() {
        let config = Config {
            render_interval: Duration::ZERO,
            policy: RenderPolicy::Eager,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_explicit_capacities_rejected() {
        let config = Config {
            window_capacity: Some(0),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            top_k: Some(0),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delimiter_byte() {
        let config = Config::default();
        assert_eq!(config.delimiter_byte(), b' ');
    }
}
