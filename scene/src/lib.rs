pub mod color;
pub mod consts;
pub mod document;
pub mod error;
pub mod layers;
pub mod operation;
pub mod path;
pub mod response;

pub use document::Document;
pub use document::LayerId;
pub use error::DocumentError;
pub use operation::Operation;
pub use response::DocumentResponse;
