//! Frame builder: turns a stats snapshot into one terminal text frame.
//!
//! A frame is plain text, newline separated:
//!
//! ```text
//! jf kwe qpl az                                 <- sliding window
//! --------------------------------------------- <- rule
//! 1.  az            => ##########
//! 2.  jf            => #####
//! 3.  kwe           => .
//! --------------------------------------------- <- rule
//! Bytes: 241  Tokens: 53  Distinct: 17
//! ```

use super::geometry::Geometry;
use crate::error::{Result, WordwheelError};
use crate::stats::{FrameSnapshot, RankedEntry};
use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width each token label is padded to.
const LABEL_WIDTH: usize = 13;
/// Graphemes kept before a label is abbreviated.
const LABEL_TRUNCATE: usize = 10;
/// Columns taken by the rank, label, and arrow before the bar starts.
const ROW_PREFIX: usize = 4 + LABEL_WIDTH + 4;

/// Builds text frames from snapshots.
///
/// Pure: identical (snapshot, geometry) inputs produce byte-identical
/// frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameBuilder;

impl FrameBuilder {
    /// Create a frame builder.
    pub const fn new() -> Self {
        Self
    }

    /// Build one frame for the given geometry.
    ///
    /// Fails only on an internal-consistency violation (a relative
    /// frequency outside [0, 1]); the caller treats that as fatal.
    pub fn build(&self, snapshot: &FrameSnapshot, geometry: Geometry) -> Result<String> {
        let columns = geometry.columns as usize;
        let rule = "-".repeat(columns);
        let mut frame = String::with_capacity(columns * (geometry.rows as usize + 1));

        frame.push_str(&snapshot.window);
        frame.push('\n');
        frame.push_str(&rule);
        frame.push('\n');

        for (idx, entry) in snapshot
            .ranked
            .iter()
            .take(geometry.chart_rows())
            .enumerate()
        {
            write_row(&mut frame, idx, entry, geometry.columns)?;
            frame.push('\n');
        }

        frame.push_str(&rule);
        frame.push('\n');
        let _ = write!(
            frame,
            "Bytes: {}  Tokens: {}  Distinct: {}",
            snapshot.counters.bytes, snapshot.counters.tokens, snapshot.distinct
        );

        Ok(frame)
    }
}

/// One chart row: `1.  label........ => ####`.
fn write_row(frame: &mut String, idx: usize, entry: &RankedEntry, columns: u16) -> Result<()> {
    let mut rank = format!("{}. ", idx + 1);
    while rank.width() < 4 {
        rank.push(' ');
    }
    frame.push_str(&rank);
    frame.push_str(&abbreviate(&entry.token));
    frame.push_str(" => ");

    let scaled = scale_linear(entry.frequency, columns)?;
    // Clip to the row remainder so a row never wraps.
    let bar = scaled.min((columns as usize).saturating_sub(ROW_PREFIX));
    if bar == 0 {
        // Low-frequency entries stay visible as a placeholder glyph.
        frame.push('.');
    } else {
        frame.extend(std::iter::repeat('#').take(bar));
    }
    Ok(())
}

/// Abbreviate a token to a fixed-width label: truncate beyond
/// [`LABEL_TRUNCATE`] graphemes with an ellipsis marker, then pad by
/// display width to [`LABEL_WIDTH`] columns.
fn abbreviate(token: &str) -> String {
    let graphemes: Vec<&str> = token.graphemes(true).collect();
    let mut label = if graphemes.len() < LABEL_TRUNCATE {
        token.to_string()
    } else {
        let mut short = graphemes[..LABEL_TRUNCATE].concat();
        short.push_str("...");
        short
    };
    while label.width() < LABEL_WIDTH {
        label.push(' ');
    }
    label
}

/// Linear scale from the frequency domain [0, 1] to [0, `max`] columns.
///
/// An out-of-domain value means a frequency-table invariant was violated
/// upstream; surfaced as a fatal internal-consistency error rather than
/// rendered.
fn scale_linear(value: f64, max: u16) -> Result<usize> {
    if !(0.0..=1.0).contains(&value) {
        return Err(WordwheelError::FrequencyOutOfRange(value));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (value * f64::from(max)) as usize;
    Ok(scaled)
}
