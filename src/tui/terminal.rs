//! Raw-mode and alternate-screen lifetime.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, error};

/// Restores the terminal when dropped, on every exit path including panics.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Switches to raw mode and the alternate screen.
    ///
    /// If entering the alternate screen fails, raw mode is switched off again
    /// before the error is returned.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self::new(out);
        execute!(guard.out, EnterAlternateScreen)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }

    fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // Each step runs even if an earlier one fails.
        if let Err(err) = disable_raw_mode() {
            error!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, Show) {
            error!(error = %err, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_drop_restores_screen() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard::new(&mut out);
        }
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(written.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_panic_still_restores_screen() {
        let mut out = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = TerminalGuard::new(&mut out);
            panic!("game loop failed");
        }));

        assert!(result.is_err());
        assert!(String::from_utf8_lossy(&out).contains(LEAVE_ALTERNATE_SCREEN));
    }
}
