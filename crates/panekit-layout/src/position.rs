#![forbid(unsafe_code)]

//! Edge-inset position descriptors and the box-style resolver.
//!
//! A [`PanelPosition`] gives up to four signed pixel insets. Per axis, the
//! near edge (`top`/`left`) defaults to 0 and anchors the panel; the far edge
//! (`bottom`/`right`) becomes an active constraint when positive (measured
//! from the near side of the viewport), producing an explicit size. A
//! negative near edge flips the anchor to the far side. Edges that stay at
//! their default render as a 0 inset, which stretches the panel to the
//! viewport edge.
//!
//! # Invariants
//!
//! 1. [`resolve`] is pure: identical input yields identical output.
//! 2. An active edge pair never yields a negative size; that is
//!    [`PositionError::InvalidRange`], not a clamp.
//! 3. The horizontal axis reserves a 1px seam (`width = right - left - 1`)
//!    so two split panels abut without overlapping borders.
//! 4. Far-edge insets are emitted negated (they grow inward).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract panel position as optional signed edge insets, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelPosition {
    pub top: Option<i32>,
    pub bottom: Option<i32>,
    pub left: Option<i32>,
    pub right: Option<i32>,
}

impl PanelPosition {
    /// A descriptor with no edges set (anchored top-left, full stretch).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub const fn top(mut self, px: i32) -> Self {
        self.top = Some(px);
        self
    }

    #[must_use]
    pub const fn bottom(mut self, px: i32) -> Self {
        self.bottom = Some(px);
        self
    }

    #[must_use]
    pub const fn left(mut self, px: i32) -> Self {
        self.left = Some(px);
        self
    }

    #[must_use]
    pub const fn right(mut self, px: i32) -> Self {
        self.right = Some(px);
        self
    }
}

/// Whether a panel is rendered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxDisplay {
    Block,
    None,
}

/// One resolved style channel: a pixel value or content-driven `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inset {
    Auto,
    Px(i32),
}

impl Inset {
    const fn from_px(px: Option<i32>) -> Self {
        match px {
            Some(v) => Self::Px(v),
            None => Self::Auto,
        }
    }

    /// Whether this channel resolved to a concrete pixel value.
    #[must_use]
    pub const fn is_px(self) -> bool {
        matches!(self, Self::Px(_))
    }
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Absolute box geometry for one panel.
///
/// `bottom` and `right` carry negated insets (they grow inward from their
/// edge). A hidden panel is `display: none` with every channel `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub display: BoxDisplay,
    pub top: Inset,
    pub height: Inset,
    pub bottom: Inset,
    pub left: Inset,
    pub width: Inset,
    pub right: Inset,
}

impl BoxStyle {
    /// The style of a panel that is not displayed.
    pub const HIDDEN: Self = Self {
        display: BoxDisplay::None,
        top: Inset::Auto,
        height: Inset::Auto,
        bottom: Inset::Auto,
        left: Inset::Auto,
        width: Inset::Auto,
        right: Inset::Auto,
    };

    /// Whether the panel is rendered.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.display, BoxDisplay::Block)
    }
}

/// Axis named in an invalid-range error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => f.write_str("vertical"),
            Self::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Errors resolving a position descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// The active edge pair implies a negative size.
    InvalidRange { axis: Axis, size: i32 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { axis, size } => {
                write!(f, "invalid {axis} position range: computed size {size}px")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Resolve a position descriptor into absolute box geometry.
///
/// `None` means the panel is not displayed. Per axis:
///
/// 1. Near edge (`top`/`left`) and far edge (`bottom`/`right`) default to 0.
/// 2. A positive far edge or negative near edge makes both edges active:
///    size is `far - near` (minus the 1px seam horizontally), and the edge
///    the panel is not anchored to goes `auto`.
/// 3. Otherwise only the near edge is active and size is `auto`.
pub fn resolve(pos: Option<&PanelPosition>) -> Result<BoxStyle, PositionError> {
    let Some(pos) = pos else {
        return Ok(BoxStyle::HIDDEN);
    };

    let mut top = Some(pos.top.unwrap_or(0));
    let mut bottom = Some(pos.bottom.unwrap_or(0));
    let mut height = None;
    if bottom.unwrap_or(0) > 0 || top.unwrap_or(0) < 0 {
        let size = bottom.unwrap_or(0) - top.unwrap_or(0);
        if size < 0 {
            return Err(PositionError::InvalidRange {
                axis: Axis::Vertical,
                size,
            });
        }
        height = Some(size);
        if top.unwrap_or(0) < 0 {
            top = None;
        } else {
            bottom = None;
        }
    }

    let mut left = Some(pos.left.unwrap_or(0));
    let mut right = Some(pos.right.unwrap_or(0));
    let mut width = None;
    if right.unwrap_or(0) > 0 || left.unwrap_or(0) < 0 {
        // 1px seam reserved for the adjoining panel's border.
        let size = right.unwrap_or(0) - left.unwrap_or(0) - 1;
        if size < 0 {
            return Err(PositionError::InvalidRange {
                axis: Axis::Horizontal,
                size,
            });
        }
        width = Some(size);
        if left.unwrap_or(0) < 0 {
            left = None;
        } else {
            right = None;
        }
    }

    Ok(BoxStyle {
        display: BoxDisplay::Block,
        top: Inset::from_px(top),
        height: Inset::from_px(height),
        bottom: Inset::from_px(bottom.map(|b| -b)),
        left: Inset::from_px(left),
        width: Inset::from_px(width),
        right: Inset::from_px(right.map(|r| -r)),
    })
}
