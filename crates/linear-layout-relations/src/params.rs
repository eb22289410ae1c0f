//! Container-scoped layout parameters

/// Margins and spacing shared by every relation a linear layout creates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Space before the first member along the layout axis.
    pub leading_margin: f32,
    /// Border between the container and the leading side of each member.
    pub leading_side_margin: f32,
    /// Border between the trailing side of each member and the container.
    pub trailing_side_margin: f32,
    /// Space between two adjacent members.
    pub spacing: f32,
}

impl LayoutParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leading_margin(mut self, margin: f32) -> Self {
        self.leading_margin = margin;
        self
    }

    pub fn leading_side_margin(mut self, margin: f32) -> Self {
        self.leading_side_margin = margin;
        self
    }

    pub fn trailing_side_margin(mut self, margin: f32) -> Self {
        self.trailing_side_margin = margin;
        self
    }

    /// Sets both side margins to the same value.
    pub fn side_margins(self, margin: f32) -> Self {
        self.leading_side_margin(margin).trailing_side_margin(margin)
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            leading_margin: 0.0,
            leading_side_margin: 0.0,
            trailing_side_margin: 0.0,
            spacing: 0.0,
        }
    }
}

/// Extent of a member along the layout axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MemberSize {
    /// Fixed extent in points.
    Absolute(f32),
    /// Fraction of the container's own extent along the axis.
    Relative(f32),
}

impl MemberSize {
    pub fn new(relative_to_layout: bool, size: f32) -> Self {
        if relative_to_layout {
            MemberSize::Relative(size)
        } else {
            MemberSize::Absolute(size)
        }
    }
}
