#![forbid(unsafe_code)]

//! The fluid row container and its two-pass measure/layout engine.
//!
//! Measurement runs in two passes: fixed children first, against the parent
//! constraint minus their own margins, then the single fluid child against
//! whatever width the fixed children left over. Layout then walks the children
//! left-to-right (`Start` gravity) or right-to-left (`End` gravity), assigning
//! each a final frame.

use std::fmt;

use crate::params::LayoutSpec;
use crate::visibility::Visibility;
use crate::{HorizontalGravity, MeasureSpec, VerticalGravity};
use fluidui_core::geometry::{Rect, Sides, Size};

/// The contract a child must implement to participate in a [`FluidRow`].
///
/// `measure` must record a measured size that the subsequent
/// `measured_width`/`measured_height` calls report; `layout` receives the
/// final parent-relative frame. The engine never calls `layout` on a child
/// whose visibility is [`Gone`](Visibility::Gone).
pub trait Element {
    /// Compute and record a measured size under the given constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec);

    /// Measured width from the last `measure` call.
    fn measured_width(&self) -> i32;

    /// Measured height from the last `measure` call.
    fn measured_height(&self) -> i32;

    /// Current visibility state.
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Accept the final frame for this cycle.
    fn layout(&mut self, frame: Rect);
}

/// Error raised by [`FluidRow::measure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The number of fluid children among those taking space is not one.
    ///
    /// This is a configuration error, not a recoverable runtime condition:
    /// the cycle aborts before any child is measured.
    FluidChildCount {
        /// How many fluid children were found.
        found: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FluidChildCount { found } => {
                write!(f, "fluid row requires exactly one fluid child (found {found})")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A child plus its parameters and last assigned frame.
#[derive(Debug)]
struct Slot<V> {
    view: V,
    spec: LayoutSpec,
    frame: Rect,
}

/// A horizontal container in which one fluid child absorbs the leftover width.
///
/// Children are kept in insertion order; that order is the placement order
/// under `Start` gravity and is reversed under `End` gravity. The container
/// itself holds no other state than its gravity, padding, last measured size,
/// and a re-layout request flag.
#[derive(Debug)]
pub struct FluidRow<V> {
    children: Vec<Slot<V>>,
    gravity: HorizontalGravity,
    padding: Sides,
    measured: Size,
    layout_requested: bool,
}

impl<V> Default for FluidRow<V> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            gravity: HorizontalGravity::Start,
            padding: Sides::default(),
            measured: Size::ZERO,
            layout_requested: false,
        }
    }
}

impl<V: Element> FluidRow<V> {
    /// Create an empty row with `Start` gravity and no padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from container-level markup attributes.
    pub fn from_attrs(attrs: &crate::RowAttrs) -> Self {
        Self {
            gravity: attrs.gravity,
            ..Self::default()
        }
    }

    /// Set the horizontal gravity (builder form).
    #[must_use]
    pub fn gravity(mut self, gravity: HorizontalGravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the container padding (builder form).
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Current horizontal gravity.
    pub fn current_gravity(&self) -> HorizontalGravity {
        self.gravity
    }

    /// Change the horizontal gravity.
    ///
    /// A no-op when the mode is unchanged; otherwise the row is marked as
    /// needing a fresh layout pass.
    pub fn set_gravity(&mut self, gravity: HorizontalGravity) {
        if self.gravity != gravity {
            self.gravity = gravity;
            self.layout_requested = true;
        }
    }

    /// Change the container padding, marking the row for re-layout.
    pub fn set_padding(&mut self, padding: impl Into<Sides>) {
        self.padding = padding.into();
        self.layout_requested = true;
    }

    /// Append a child with default parameters (fixed, top-aligned).
    pub fn push(&mut self, view: V) {
        self.push_with_spec(view, LayoutSpec::default());
    }

    /// Append a child with explicit parameters.
    pub fn push_with_spec(&mut self, view: V, spec: LayoutSpec) {
        self.children.push(Slot {
            view,
            spec,
            frame: Rect::default(),
        });
        self.layout_requested = true;
    }

    /// Number of children, including gone ones.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the row has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The child at `index`.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.children.get(index).map(|slot| &slot.view)
    }

    /// Mutable access to the child at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut V> {
        self.children.get_mut(index).map(|slot| &mut slot.view)
    }

    /// The parameters of the child at `index`.
    pub fn spec(&self, index: usize) -> Option<&LayoutSpec> {
        self.children.get(index).map(|slot| &slot.spec)
    }

    /// Replace the parameters of the child at `index` wholesale.
    ///
    /// Parameters are immutable during a pass; this is the between-pass
    /// reassignment hook. Marks the row for re-layout.
    pub fn set_spec(&mut self, index: usize, spec: LayoutSpec) {
        if let Some(slot) = self.children.get_mut(index) {
            slot.spec = spec;
            self.layout_requested = true;
        }
    }

    /// The frame last assigned to the child at `index`.
    ///
    /// Stale for gone children, which the layout pass skips.
    pub fn child_frame(&self, index: usize) -> Option<Rect> {
        self.children.get(index).map(|slot| slot.frame)
    }

    /// The container size resolved by the last successful `measure`.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Whether a re-layout has been requested since the last `layout` call.
    pub fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    /// Measure all children and resolve the container's own size.
    ///
    /// Fixed children are measured first against the parent constraints
    /// reduced by their own margins; the fluid child is then offered whatever
    /// width remains. The resolved size is stored and returned.
    ///
    /// # Errors
    ///
    /// [`LayoutError::FluidChildCount`] when the number of fluid children
    /// among those taking space is not exactly one. No child is measured in
    /// that case.
    pub fn measure(
        &mut self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Result<Size, LayoutError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "row_measure",
            width_mode = ?width_spec.mode,
            width = width_spec.size,
            height_mode = ?height_spec.mode,
            height = height_spec.size,
        )
        .entered();

        let mut found = 0;
        let mut fluid_ix = None;
        for (i, slot) in self.children.iter().enumerate() {
            if slot.spec.is_fluid && slot.view.visibility().takes_space() {
                found += 1;
                fluid_ix = Some(i);
            }
        }
        let Some(fluid_ix) = fluid_ix.filter(|_| found == 1) else {
            #[cfg(feature = "tracing")]
            tracing::error!(found, "fluid child count must be exactly one");
            return Err(LayoutError::FluidChildCount { found });
        };

        // Fixed pass: margins count as consumed space.
        let mut fixed_width = 0;
        for slot in &mut self.children {
            if slot.spec.is_fluid || !slot.view.visibility().takes_space() {
                continue;
            }
            let margin = slot.spec.margin;
            slot.view.measure(
                width_spec.reduce(margin.horizontal_sum()),
                height_spec.reduce(margin.vertical_sum()),
            );
            fixed_width += slot.view.measured_width() + margin.horizontal_sum();
        }

        // Fluid pass: offer whatever width the fixed children left over.
        let fluid = &mut self.children[fluid_ix];
        let fluid_margin = fluid.spec.margin;
        fluid.view.measure(
            width_spec.reduce(fixed_width + fluid_margin.horizontal_sum()),
            height_spec.reduce(fluid_margin.vertical_sum()),
        );
        let fluid_width = fluid.view.measured_width();
        let fluid_height = fluid.view.measured_height();

        let desired_width =
            fixed_width + fluid_width + fluid_margin.horizontal_sum() + self.padding.horizontal_sum();

        let mut content_height = fluid_height + fluid_margin.vertical_sum();
        for (i, slot) in self.children.iter().enumerate() {
            if i == fluid_ix || !slot.view.visibility().takes_space() {
                continue;
            }
            let item_height = slot.view.measured_height() + slot.spec.margin.vertical_sum();
            content_height = content_height.max(item_height);
        }
        let desired_height = content_height + self.padding.vertical_sum();

        self.measured = Size::new(
            width_spec.resolve(desired_width),
            height_spec.resolve(desired_height),
        );
        Ok(self.measured)
    }

    /// Assign every space-taking child its final frame within `bounds`.
    ///
    /// Assumes the preceding `measure` succeeded; the fluid-count
    /// precondition is not re-checked here. Clears the re-layout request.
    pub fn layout(&mut self, bounds: Rect) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "row_layout",
            left = bounds.left,
            top = bounds.top,
            right = bounds.right,
            bottom = bounds.bottom,
        )
        .entered();

        self.layout_requested = false;
        match self.gravity {
            HorizontalGravity::Start => self.layout_from_left(bounds),
            HorizontalGravity::End => self.layout_from_right(bounds),
        }
    }

    fn layout_from_left(&mut self, bounds: Rect) {
        let mut offset = bounds.left + self.padding.left;
        for i in 0..self.children.len() {
            if !self.children[i].view.visibility().takes_space() {
                continue;
            }
            self.place(i, offset);
            let slot = &self.children[i];
            offset += slot.spec.margin.horizontal_sum() + slot.view.measured_width();
        }
    }

    fn layout_from_right(&mut self, bounds: Rect) {
        let mut offset = bounds.right - self.padding.right;
        for i in (0..self.children.len()).rev() {
            if !self.children[i].view.visibility().takes_space() {
                continue;
            }
            let slot = &self.children[i];
            let advance = slot.spec.margin.horizontal_sum() + slot.view.measured_width();
            self.place(i, offset - advance);
            offset -= advance;
        }
    }

    /// Place one child at the given pre-margin left offset.
    ///
    /// Vertical edges come from the child's gravity, computed against the
    /// container's measured height. Center keeps per-term integer division
    /// (`h/2 - child/2`), which is asymmetric for odd differences.
    fn place(&mut self, index: usize, left: i32) {
        let height = self.measured.height;
        let padding = self.padding;
        let slot = &mut self.children[index];
        let margin = slot.spec.margin;
        let child_width = slot.view.measured_width();
        let child_height = slot.view.measured_height();
        let x = left + margin.left;

        let frame = match slot.spec.gravity {
            VerticalGravity::Bottom => {
                let bottom = height - padding.bottom - margin.bottom;
                Rect::new(x, bottom - child_height, x + child_width, bottom)
            }
            VerticalGravity::Center => Rect::new(
                x,
                height / 2 - child_height / 2,
                x + child_width,
                height / 2 + child_height / 2,
            ),
            VerticalGravity::Top => {
                let top = padding.top + margin.top;
                Rect::new(x, top, x + child_width, top + child_height)
            }
        };

        slot.frame = frame;
        slot.view.layout(frame);
    }
}
