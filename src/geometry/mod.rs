mod circle;
mod field;
mod segment;

pub use circle::Circle;
pub use field::Field;
pub use segment::Segment;
