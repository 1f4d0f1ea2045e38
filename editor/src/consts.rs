// ANNOTATIONS
/// Font size of the angle label, in document units.
pub const ANNOTATION_FONT_SIZE: f64 = 12.;
pub const ANNOTATION_STROKE_WEIGHT: f32 = 1.;
/// Decimal places kept when rounding an angle for display.
pub const ANGLE_DISPLAY_DECIMALS: i32 = 2;
/// Divides the chord normal to size the arc bulge when the perpendicular solver has no solution.
pub const CONTROL_FALLBACK_DIVISOR: f64 = 4.;

// TOOLS
pub const DEFAULT_LINE_WEIGHT: f32 = 5.;

// LOCALIZATION
pub const DEFAULT_LANGUAGE: &str = "en";
