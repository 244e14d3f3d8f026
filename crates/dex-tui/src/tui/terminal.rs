//! Terminal setup and teardown.

use anyhow::Result;
use ratatui::{DefaultTerminal, Frame};

/// Alternate-screen terminal, restored on drop.
pub struct Terminal {
    inner: DefaultTerminal,
}

impl Terminal {
    /// Enters the alternate screen and raw mode.
    ///
    /// `ratatui::try_init` also installs a panic hook that restores the terminal.
    pub fn enter() -> Result<Self> {
        Ok(Self {
            inner: ratatui::try_init()?,
        })
    }

    /// Draw a frame.
    pub fn draw(&mut self, f: impl FnOnce(&mut Frame)) -> Result<()> {
        self.inner.draw(f)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
