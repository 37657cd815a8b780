use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// The bounded rectangular field containing the viewpoint and obstacles.
///
/// The field's boundary is sampled at unit spacing to aim the ray fan; the
/// field itself stores only its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    width: u32,
    height: u32,
}

impl Field {
    /// Creates a new field.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyField { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Returns the field width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the field height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Boundary sample points the ray fan is aimed at, in emission order:
    /// for every integer `x` the bottom then top edge point, then for every
    /// integer `y` the left then right edge point. `2 * width + 2 * height`
    /// targets in total.
    pub fn boundary_targets(&self) -> impl Iterator<Item = Point2> {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        (0..self.width)
            .flat_map(move |x| {
                let x = f64::from(x);
                [Point2::new(x, 0.0), Point2::new(x, h)]
            })
            .chain((0..self.height).flat_map(move |y| {
                let y = f64::from(y);
                [Point2::new(0.0, y), Point2::new(w, y)]
            }))
    }
}
