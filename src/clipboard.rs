use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Somewhere the share text can be written to.
pub trait ClipboardWriter: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard. The handle is opened on the first write and
/// then kept for the session: on X11 and Wayland the selection only lives as
/// long as a `Clipboard` does. A session without a display still starts and
/// only the copy fails.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self
            .handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()));
        // reopen on the next write rather than reuse a handle that just failed
        if result.is_err() {
            self.clipboard = None;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            ClipboardError::Unavailable("no display".into()).to_string(),
            "clipboard unavailable: no display"
        );
        assert_eq!(
            ClipboardError::Write("denied".into()).to_string(),
            "clipboard write failed: denied"
        );
    }

    #[test]
    fn no_handle_until_first_write() {
        let clipboard = ArboardClipboard::new();
        assert!(clipboard.clipboard.is_none());
    }

    #[test]
    fn writer_can_move_to_another_thread() {
        fn assert_send<T: Send>() {}
        assert_send::<ArboardClipboard>();
    }
}
