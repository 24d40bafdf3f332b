//! Copying a selected emoji glyph to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Longest text accepted for copying (a glyph plus modifiers is a few dozen bytes)
const MAX_CLIPBOARD_SIZE: usize = 1024;

/// Destination for copied glyphs
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, through arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Reject text that is empty, blank or implausibly long for a glyph
fn validate_glyph(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Cannot copy an empty glyph to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Glyph too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }

    Ok(())
}

impl<P: ClipboardProvider + ?Sized> ClipboardProvider for &mut P {
    fn set_text(&mut self, text: &str) -> Result<()> {
        (**self).set_text(text)
    }
}

/// Validate `text`, then open a provider and write to it
fn copy_with_provider<P, F>(text: &str, open: F) -> Result<()>
where
    P: ClipboardProvider,
    F: FnOnce() -> Result<P>,
{
    validate_glyph(text)?;
    open()?.set_text(text)
}

/// Copy an emoji glyph to the system clipboard.
///
/// Validation runs before the clipboard is opened, so bad input reports a clear error even
/// on machines without a clipboard (headless CI, SSH sessions).
///
/// # Errors
/// Returns error if:
/// - Text is empty or whitespace only
/// - Text is longer than 1 KiB
/// - The system clipboard is unavailable or refuses the write
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_with_provider(text, SystemClipboard::new)
}
