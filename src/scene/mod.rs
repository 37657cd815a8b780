//! Obstacle collections supplied to the sweep.
//!
//! The sweep borrows a [`Scene`] for exactly one evaluation cycle; nothing
//! here persists or mutates across cycles.

use rand::Rng;

use crate::error::Result;
use crate::geometry::{Circle, Field, Segment};
use crate::math::Point2;

/// Smallest radius handed out by [`Scene::random`].
pub const MIN_RANDOM_RADIUS: u32 = 30;

/// Largest radius handed out by [`Scene::random`].
pub const MAX_RANDOM_RADIUS: u32 = 60;

/// The obstacle lists for one evaluation cycle.
///
/// Order is significant: the sweep tests obstacles in list order, and
/// nearest-hit ties are broken in favor of the earlier obstacle.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub circles: Vec<Circle>,
}

impl Scene {
    /// Creates a scene from explicit obstacle lists.
    #[must_use]
    pub fn new(segments: Vec<Segment>, circles: Vec<Circle>) -> Self {
        Self { segments, circles }
    }

    /// Generates a scene with uniformly placed obstacles.
    ///
    /// Segment endpoints and circle centers fall on integer coordinates
    /// anywhere in the field, far edges included; radii are integers in
    /// `[MIN_RANDOM_RADIUS, MAX_RANDOM_RADIUS]`, so circles may poke past
    /// the field boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if circle construction fails; the radius range is
    /// positive, so this does not happen in practice.
    pub fn random(field: &Field, num_segments: usize, num_circles: usize) -> Result<Self> {
        let mut rng = rand::rng();

        let segments = (0..num_segments)
            .map(|_| {
                Segment::new(
                    random_point(&mut rng, field),
                    random_point(&mut rng, field),
                )
            })
            .collect();

        let circles = (0..num_circles)
            .map(|_| {
                let center = random_point(&mut rng, field);
                let radius = rng.random_range(MIN_RANDOM_RADIUS..=MAX_RANDOM_RADIUS);
                Circle::new(center, f64::from(radius))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments, circles })
    }
}

fn random_point<R: Rng>(rng: &mut R, field: &Field) -> Point2 {
    let x = rng.random_range(0..=field.width());
    let y = rng.random_range(0..=field.height());
    Point2::new(f64::from(x), f64::from(y))
}
