// RENDERING
pub const SVG_HEADER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#;

// SHARED DEFS
pub const ARROW_MARKER_ID: &str = "angle-arrow-marker";
pub const LABEL_BACKDROP_FILTER_ID: &str = "angle-label-backdrop";
pub const LABEL_BACKDROP_FLOOD_COLOR: &str = "#cccc";
