//! Clipboard output.

use super::error::ClipboardError;

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Set `text` so it stays pasteable after this process exits.
    ///
    /// Where the owning process serves the selection (X11/Wayland) this
    /// blocks until another program takes the clipboard over.
    fn set_text_and_hold(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.set_text(text)
    }
}

/// Whether [`Clipboard::set_text_and_hold`] blocks on this platform.
pub const HOLDS_SELECTION: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

/// The platform clipboard, backed by `arboard`.
///
/// On X11/Wayland the copied text is served by this process, so keep the
/// value alive for as long as the text should stay pasteable (unless a
/// clipboard manager takes it over).
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new()?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text.to_owned())?;
        log::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn set_text_and_hold(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        log::debug!("Serving {} bytes until the clipboard changes owner", text.len());
        self.inner.set().wait().text(text.to_owned())?;
        Ok(())
    }
}

/// A [`SystemClipboard`] that is only opened on the first write, then kept.
///
/// Lets a long-running session start on machines without a clipboard and
/// only report the problem when the user actually copies.
#[derive(Default)]
pub struct LazyClipboard {
    inner: Option<SystemClipboard>,
}

impl Clipboard for LazyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => SystemClipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text)
    }
}

/// Copy text to a clipboard verbatim.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    text: &str,
) -> Result<(), ClipboardError> {
    clipboard.set_text(text)
}
