mod field;
mod point;

pub use field::Field;
pub use point::Point;
