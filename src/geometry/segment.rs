use crate::math::{Point2, Vector2};

/// A directed line segment from `start` to `end`.
///
/// Direction matters for angle computations; for intersection math the
/// endpoints are interchangeable. A degenerate segment (coincident
/// endpoints) is legal: its direction vector is zero and angle computations
/// against it yield a neutral result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the (non-normalized) direction vector `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}
