use thiserror::Error;

/// Top-level error type for the sightline visibility kernel.
#[derive(Debug, Error)]
pub enum SightlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric construction.
///
/// These only arise when building inputs (a circle with a negative radius,
/// a field with zero area). The sweep itself never fails: parallel lines,
/// zero-length rays, and degenerate segments all resolve to empty or
/// neutral results.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("circle radius {0} is negative")]
    NegativeRadius(f64),

    #[error("field is {width}x{height}; both dimensions must be non-zero")]
    EmptyField { width: u32, height: u32 },
}

/// Convenience type alias for results using [`SightlineError`].
pub type Result<T> = std::result::Result<T, SightlineError>;
