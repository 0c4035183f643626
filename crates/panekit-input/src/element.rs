#![forbid(unsafe_code)]

//! Synthesized element data for delegated dispatch.
//!
//! The embedding walks the real DOM once per event and flattens what the
//! dispatcher needs into these types, so dispatch logic is unit-testable by
//! constructing chains by hand.

/// One element in a click target's ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRef {
    /// The dedicated overlay-backdrop element behind the topmost popup.
    OverlayBackdrop,
    /// An anchor; `host` is empty for same-document links and `pathname`
    /// carries its leading slash, as the DOM reports them.
    Anchor { host: String, pathname: String },
    /// A button with its `name`/`value` attributes.
    Button { name: String, value: String },
    /// Anything else on the way up.
    Other,
}

impl ElementRef {
    #[must_use]
    pub fn anchor(host: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self::Anchor {
            host: host.into(),
            pathname: pathname.into(),
        }
    }

    #[must_use]
    pub fn button(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Button {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A click event, flattened to the target's ancestor chain (target first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickContext {
    pub chain: Vec<ElementRef>,
}

impl ClickContext {
    #[must_use]
    pub fn new(chain: Vec<ElementRef>) -> Self {
        Self { chain }
    }

    /// Whether the event target itself is the overlay backdrop.
    ///
    /// Only the direct target counts; a backdrop further up the chain means
    /// the click landed on popup content.
    #[must_use]
    pub fn target_is_backdrop(&self) -> bool {
        self.chain.first() == Some(&ElementRef::OverlayBackdrop)
    }
}

/// The focused form control at keydown time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusedControl {
    /// An `<input>` with its lowercase `type` attribute (empty for default).
    Input { input_type: String, has_value: bool },
    /// A `<textarea>`.
    TextArea { has_value: bool },
    /// Anything else (buttons, links, the body).
    #[default]
    Other,
}

impl FocusedControl {
    /// Whether keystrokes belong to in-progress typing and must never be
    /// intercepted.
    ///
    /// True for text-accepting inputs and textareas holding a non-empty
    /// value; button/radio/checkbox/file inputs never capture typing.
    #[must_use]
    pub fn captures_typing(&self) -> bool {
        match self {
            Self::Input {
                input_type,
                has_value,
            } => {
                *has_value
                    && !matches!(
                        input_type.as_str(),
                        "button" | "radio" | "checkbox" | "file"
                    )
            }
            Self::TextArea { has_value } => *has_value,
            Self::Other => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_only_counts_as_direct_target() {
        let direct = ClickContext::new(vec![ElementRef::OverlayBackdrop]);
        assert!(direct.target_is_backdrop());

        let nested = ClickContext::new(vec![ElementRef::Other, ElementRef::OverlayBackdrop]);
        assert!(!nested.target_is_backdrop());
    }

    #[test]
    fn filled_text_input_captures_typing() {
        let control = FocusedControl::Input {
            input_type: "text".into(),
            has_value: true,
        };
        assert!(control.captures_typing());
    }

    #[test]
    fn empty_text_input_does_not_capture() {
        let control = FocusedControl::Input {
            input_type: "text".into(),
            has_value: false,
        };
        assert!(!control.captures_typing());
    }

    #[test]
    fn button_like_inputs_never_capture() {
        for input_type in ["button", "radio", "checkbox", "file"] {
            let control = FocusedControl::Input {
                input_type: input_type.into(),
                has_value: true,
            };
            assert!(!control.captures_typing(), "{input_type}");
        }
    }

    #[test]
    fn filled_textarea_captures_typing() {
        assert!(FocusedControl::TextArea { has_value: true }.captures_typing());
        assert!(!FocusedControl::TextArea { has_value: false }.captures_typing());
    }

    #[test]
    fn default_focus_is_other() {
        assert!(!FocusedControl::default().captures_typing());
    }
}
