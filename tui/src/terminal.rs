//! Mouse reporting around the UI loop.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use std::io::{self, Write};

/// Turn on mouse reporting on `out`.
///
/// On failure `restore` runs before the error is returned, so the caller
/// never leaves the terminal in raw mode.
pub fn enable_mouse<W: Write>(out: &mut W, restore: impl FnOnce()) -> io::Result<()> {
    execute!(out, EnableMouseCapture).inspect_err(|_| restore())
}

pub fn disable_mouse<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_restores_terminal() {
        let mut restored = false;
        let result = enable_mouse(&mut Closed, || restored = true);
        assert!(result.is_err());
        assert!(restored);
    }

    #[cfg(unix)]
    #[test]
    fn test_success_leaves_terminal_alone() {
        let mut out = Vec::new();
        let mut restored = false;
        enable_mouse(&mut out, || restored = true).unwrap();
        assert!(!restored);
        assert!(!out.is_empty());

        out.clear();
        disable_mouse(&mut out).unwrap();
        assert!(!out.is_empty());
    }
}
