//! Terminal output: the renderer seam and its crossterm implementation.

mod output;
mod screen;

pub use output::OutputBuffer;
pub use screen::{Renderer, Screen};
