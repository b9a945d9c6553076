#![forbid(unsafe_code)]

//! Fluid horizontal row layout.
//!
//! This crate provides a single container, [`FluidRow`], that arranges its
//! children side by side. Exactly one child is marked *fluid* and absorbs all
//! horizontal space left over after the remaining (*fixed*) children are
//! measured at their natural size:
//!
//! - [`MeasureSpec`] - the size contract a parent imposes along one axis
//!   (`Unspecified`, `AtMost`, or `Exactly`)
//! - [`LayoutSpec`] - per-child parameters (fluid flag, vertical gravity,
//!   margins)
//! - [`FluidRow`] - the container and its two-pass measure/layout engine
//! - [`Element`] - the contract a child must implement to participate
//!
//! # Example
//!
//! ```ignore
//! use fluidui_layout::{Element, FluidRow, LayoutSpec, MeasureSpec, Rect};
//!
//! let mut row = FluidRow::new();
//! row.push_with_spec(label, LayoutSpec::default());
//! row.push_with_spec(input, LayoutSpec::fluid());
//!
//! let size = row.measure(MeasureSpec::exactly(300), MeasureSpec::at_most(48))?;
//! row.layout(Rect::from_size(size));
//! ```
//!
//! Measurement fails with [`LayoutError::FluidChildCount`] unless exactly one
//! non-gone child is fluid; silently electing a fluid child would produce a
//! misleading layout.

pub mod params;
pub mod row;
pub mod visibility;

pub use fluidui_core::geometry::{Rect, Sides, Size};
pub use params::{ChildAttrs, GravityAttr, LayoutSpec, RowAttrs};
pub use row::{Element, FluidRow, LayoutError};
pub use visibility::Visibility;

use serde::{Deserialize, Serialize};

/// The way a parent bounds a child's size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// No limit imposed; the child may be as large as it wants.
    #[default]
    Unspecified,
    /// The child may be as large as it wants, up to the given size.
    AtMost,
    /// The child must be exactly the given size.
    Exactly,
}

/// A size constraint along one axis: a [`MeasureMode`] plus a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasureSpec {
    /// How `size` bounds the child.
    pub mode: MeasureMode,
    /// The bound, in pixels. Unused when `mode` is `Unspecified`.
    pub size: i32,
}

impl MeasureSpec {
    /// Create a spec with an explicit mode and size.
    #[inline]
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    /// An unbounded spec.
    #[inline]
    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// An upper-bound spec.
    #[inline]
    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// An exact-size spec.
    #[inline]
    pub const fn exactly(size: i32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    /// Resolve a desired size against this spec.
    ///
    /// `Unspecified` keeps the desired size, `AtMost` clamps it, and
    /// `Exactly` overrides it with the spec size.
    #[inline]
    pub const fn resolve(self, desired: i32) -> i32 {
        match self.mode {
            MeasureMode::Unspecified => desired,
            MeasureMode::AtMost => {
                if desired < self.size {
                    desired
                } else {
                    self.size
                }
            }
            MeasureMode::Exactly => self.size,
        }
    }

    /// Derive a child spec with `used` pixels already consumed.
    ///
    /// Keeps the mode and floors the remaining size at zero.
    #[inline]
    pub const fn reduce(self, used: i32) -> Self {
        let remaining = self.size - used;
        Self::new(self.mode, if remaining > 0 { remaining } else { 0 })
    }
}

/// Which edge the row anchors its children to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalGravity {
    /// Anchor at the left edge, children placed in order.
    #[default]
    Start,
    /// Anchor at the right edge, children placed in reverse order.
    End,
}

/// Per-child vertical alignment within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalGravity {
    /// Align to the padded top edge.
    #[default]
    Top,
    /// Align to the padded bottom edge.
    Bottom,
    /// Center on the row's vertical midpoint.
    Center,
}
