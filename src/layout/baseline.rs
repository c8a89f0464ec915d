use crate::layout::TextLine;
use crate::units::{Pt, BASELINE_GRID};

/// Evenly spaced horizontal lines that text baselines are aligned to.
/// Positions are measured down from the top of the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BaselineGrid {
    pub step: Pt,
    /// Position of the first grid line
    pub origin: Pt,
}

impl Default for BaselineGrid {
    fn default() -> Self {
        BaselineGrid {
            step: BASELINE_GRID,
            origin: Pt::ZERO,
        }
    }
}

/// How a line is moved onto the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSnap {
    /// To the closest grid line
    Round,
    /// To the grid line at or above
    Up,
    /// Like [`GridSnap::Up`]: the line moves by the distance to the grid
    /// line above it. Kept separate so callers can state which side of a
    /// grid line they start from.
    Down,
    /// To the n-th grid line
    Line(usize),
}

/// The part of a text line that is aligned to the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineFeature {
    Baseline,
    CapHeight,
    XHeight,
}

impl LineFeature {
    /// Position of this feature relative to the top of the text
    pub fn position(self, line: &TextLine) -> Pt {
        match self {
            LineFeature::Baseline => line.baseline,
            LineFeature::CapHeight => line.cap_line(),
            LineFeature::XHeight => line.x_line(),
        }
    }
}

impl BaselineGrid {
    pub fn new(step: Pt) -> BaselineGrid {
        BaselineGrid {
            step,
            ..BaselineGrid::default()
        }
    }

    pub fn with_origin(mut self, origin: Pt) -> BaselineGrid {
        self.origin = origin;
        self
    }

    /// Distance from `y` up to the grid line at or above it, in `[0, step)`.
    /// A grid without a positive step puts every position on the grid.
    pub fn distance_to_grid(&self, y: Pt) -> Pt {
        if self.step.0 <= 0.0 {
            return Pt::ZERO;
        }
        Pt((y - self.origin).0.rem_euclid(self.step.0))
    }

    /// Offset to add to `y` to land on the grid according to `snap`
    pub fn snap_offset(&self, y: Pt, snap: GridSnap) -> Pt {
        let distance = self.distance_to_grid(y);
        match snap {
            GridSnap::Round if distance.0 > self.step.0 / 2.0 => self.step - distance,
            GridSnap::Round | GridSnap::Up | GridSnap::Down => -distance,
            GridSnap::Line(n) => self.line(n) - y,
        }
    }

    /// Position of the n-th grid line
    pub fn line(&self, n: usize) -> Pt {
        self.origin + self.step * n as f64
    }

    /// Whether `y` is within `tolerance` of a grid line
    pub fn is_on_grid(&self, y: Pt, tolerance: Pt) -> bool {
        let distance = self.distance_to_grid(y);
        distance <= tolerance || self.step - distance <= tolerance
    }
}
