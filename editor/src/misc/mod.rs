pub mod hints;
#[cfg(test)]
pub mod test_utils;

mod error;

pub use error::EditorError;
pub use hints::*;
