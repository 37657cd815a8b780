pub mod angle_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Used by tests and by callers comparing computed points. The intersection
/// routines themselves compare their denominators and discriminants against
/// exact zero; see `intersect_2d` for why.
pub const TOLERANCE: f64 = 1e-10;
