#![forbid(unsafe_code)]

//! Theme mirroring: preference state → document styling.
//!
//! The shell's only write to document-level styling goes through the
//! injected [`StyleSink`], so the mirror is testable without a document. The
//! mirror follows the store's subscribe-and-run contract: it applies the
//! current preference immediately on construction, then again on every
//! change notification.

/// Where document-level style classes are written.
pub trait StyleSink {
    /// Replace the document body's class list.
    fn set_body_class(&mut self, class: &str);
}

/// Body class applied when the dark preference is on.
pub const DARK_CLASS: &str = "dark";

/// Mirrors the dark-mode preference into the style sink.
#[derive(Debug)]
pub struct ThemeMirror<S: StyleSink> {
    sink: S,
}

impl<S: StyleSink> ThemeMirror<S> {
    /// Construct and run once with the current preference.
    pub fn new(sink: S, dark: bool) -> Self {
        let mut mirror = Self { sink };
        mirror.prefs_changed(dark);
        mirror
    }

    /// Apply a preference change.
    pub fn prefs_changed(&mut self, dark: bool) {
        self.sink
            .set_body_class(if dark { DARK_CLASS } else { "" });
    }
}
