//! Full-screen terminal renderer with restore-on-drop.

use super::output::OutputBuffer;
use crate::error::{Result, WordwheelError};
use crate::frame::Geometry;
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};

/// Draws pre-built text frames to an output device.
///
/// The pipeline only ever hands a renderer complete frames; how they
/// reach the screen is this seam's concern.
pub trait Renderer: Send {
    /// Draw `frame`, replacing the previous frame in place.
    fn render(&mut self, frame: &str) -> io::Result<()>;
}

/// Crossterm-backed full-screen renderer.
///
/// Construction takes over the terminal (raw mode, alternate screen,
/// hidden cursor); `Drop` restores the original state, including on
/// error paths.
pub struct Screen {
    stdout: Stdout,
    output: OutputBuffer,
}

impl Screen {
    /// Acquire the terminal for full-screen rendering.
    ///
    /// Fails with [`WordwheelError::TerminalInit`] when the terminal
    /// cannot be controlled, before any render is attempted.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().map_err(WordwheelError::TerminalInit)?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .map_err(WordwheelError::TerminalInit)?;

        Ok(Self {
            stdout,
            output: OutputBuffer::new(),
        })
    }

    /// Current terminal geometry.
    pub fn geometry() -> Result<Geometry> {
        let (columns, rows) = terminal::size().map_err(WordwheelError::TerminalInit)?;
        Ok(Geometry::new(columns, rows))
    }
}

impl Renderer for Screen {
    fn render(&mut self, frame: &str) -> io::Result<()> {
        self.output.clear();
        self.output.cursor_home();
        for line in frame.lines() {
            self.output.write_str(line);
            // Erase any residue from a longer previous line.
            self.output.erase_line_tail();
            self.output.write_str("\r\n");
        }
        // A shorter frame must not leave stale rows below.
        self.output.erase_screen_tail();
        self.output.flush_to(&mut self.stdout)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
