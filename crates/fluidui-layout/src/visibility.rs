#![forbid(unsafe_code)]

//! Child visibility states.

/// How a child participates in layout and drawing.
///
/// Drawing is the host's concern; the layout engine only distinguishes
/// space-consuming children from [`Gone`](Visibility::Gone) ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Laid out and drawn.
    #[default]
    Visible,
    /// Laid out but not drawn; still consumes space.
    Hidden,
    /// Skipped entirely; consumes no space in either pass.
    Gone,
}

impl Visibility {
    /// Whether the child occupies space in the row.
    #[inline]
    pub const fn takes_space(self) -> bool {
        !matches!(self, Visibility::Gone)
    }
}
