pub mod annotation;
pub mod measurement;
