use crate::policy::{AxisPolicy, HorizontalPolicy, VerticalPolicy};

static HORIZONTAL: HorizontalPolicy = HorizontalPolicy;
static VERTICAL: VerticalPolicy = VerticalPolicy;

/// The direction along which a linear layout arranges its members.
///
/// The cross axis is the one used for side pinning: a horizontal layout pins
/// the top and bottom edges of every member, a vertical layout pins the
/// leading and trailing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Members are placed leading to trailing.
    /// Sides: top and bottom.
    Horizontal,

    /// Members are placed top to bottom.
    /// Sides: leading and trailing.
    Vertical,
}

impl Axis {
    /// Returns the relation factory for this axis.
    pub fn policy(self) -> &'static dyn AxisPolicy {
        match self {
            Axis::Horizontal => &HORIZONTAL,
            Axis::Vertical => &VERTICAL,
        }
    }
}
