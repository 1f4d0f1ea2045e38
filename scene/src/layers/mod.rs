pub mod folder_layer;
pub mod layer_info;
pub mod line_layer;
pub mod shape_layer;
pub mod style;
pub mod text_layer;
pub mod use_layer;

pub use folder_layer::FolderLayer;
pub use layer_info::{Layer, LayerData, LayerDataType};
pub use line_layer::LineLayer;
pub use shape_layer::ShapeLayer;
pub use text_layer::TextLayer;
pub use use_layer::UseLayer;
