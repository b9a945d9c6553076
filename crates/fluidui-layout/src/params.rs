#![forbid(unsafe_code)]

//! Per-child layout parameters and the markup attribute surface.
//!
//! [`LayoutSpec`] is what the engine consumes. [`RowAttrs`] and [`ChildAttrs`]
//! model the declarative markup surface: plain serde schemas with defaults for
//! every field, so a host can deserialize whatever attribute subset its
//! resource format carries and missing values fall back rather than error.

use crate::VerticalGravity;
use fluidui_core::geometry::Sides;
use serde::{Deserialize, Serialize};

/// Per-child layout parameters.
///
/// Owned by the child's slot in the row and treated as immutable during a
/// single measure/layout cycle; replace it wholesale between cycles with
/// [`FluidRow::set_spec`](crate::FluidRow::set_spec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSpec {
    /// Whether this child absorbs the leftover horizontal space.
    pub is_fluid: bool,
    /// Vertical alignment within the row.
    pub gravity: VerticalGravity,
    /// Outer margins, in pixels. Expected non-negative.
    pub margin: Sides,
}

impl LayoutSpec {
    /// Default parameters: fixed, top-aligned, zero margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for the fluid child.
    pub fn fluid() -> Self {
        Self {
            is_fluid: true,
            ..Self::default()
        }
    }

    /// Set the vertical gravity.
    #[must_use]
    pub fn gravity(mut self, gravity: VerticalGravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the margins.
    #[must_use]
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Build parameters from parsed markup attributes.
    pub fn from_attrs(attrs: &ChildAttrs) -> Self {
        Self {
            is_fluid: attrs.is_fluid,
            gravity: attrs.gravity.resolve(),
            margin: Sides::new(
                attrs.margin_top,
                attrs.margin_right,
                attrs.margin_bottom,
                attrs.margin_left,
            ),
        }
    }
}

impl From<&ChildAttrs> for LayoutSpec {
    fn from(attrs: &ChildAttrs) -> Self {
        Self::from_attrs(attrs)
    }
}

/// Vertical gravity as it appears in markup, including the unset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityAttr {
    /// No gravity attribute present; behaves as `Top`.
    #[default]
    Unset,
    Top,
    Bottom,
    Center,
}

impl GravityAttr {
    /// Collapse the markup value into the engine's gravity.
    pub const fn resolve(self) -> VerticalGravity {
        match self {
            GravityAttr::Unset | GravityAttr::Top => VerticalGravity::Top,
            GravityAttr::Bottom => VerticalGravity::Bottom,
            GravityAttr::Center => VerticalGravity::Center,
        }
    }
}

/// Container-level markup attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RowAttrs {
    /// Which edge the row anchors to.
    pub gravity: crate::HorizontalGravity,
}

/// Per-child markup attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ChildAttrs {
    /// Whether this child is the fluid one.
    pub is_fluid: bool,
    /// Vertical gravity, if present.
    pub gravity: GravityAttr,
    /// Left margin in pixels.
    pub margin_left: i32,
    /// Top margin in pixels.
    pub margin_top: i32,
    /// Right margin in pixels.
    pub margin_right: i32,
    /// Bottom margin in pixels.
    pub margin_bottom: i32,
}
