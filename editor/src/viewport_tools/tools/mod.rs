pub mod angle;
pub mod line;
pub mod select;
pub mod shared;
