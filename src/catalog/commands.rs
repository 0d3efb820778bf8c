// Command names understood by the image-resizing endpoint
//
// These are written to the query string verbatim. Casing is part of the
// contract: `paddingWidth` and `paddingcolor` are different commands.

// =============================================================================
// Resize
// =============================================================================

pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const MAX_WIDTH: &str = "maxwidth";
pub const MAX_HEIGHT: &str = "maxheight";
pub const MODE: &str = "mode";
pub const SCALE: &str = "scale";
pub const ZOOM: &str = "zoom";
pub const CROP: &str = "crop";
pub const ANCHOR: &str = "anchor";

// =============================================================================
// Transform
// =============================================================================

pub const AUTO_ROTATE: &str = "autorotate";
/// Rotation in 90 degree intervals, applied to the source
pub const ROTATE_INTERVAL: &str = "srotate";
/// Arbitrary rotation, applied after cropping
pub const ROTATE_DEGREES: &str = "rotate";
pub const FLIP_BEFORE: &str = "sflip";
pub const FLIP_AFTER: &str = "flip";

// =============================================================================
// Style
// =============================================================================

pub const BACKGROUND_COLOR: &str = "bgcolor";
pub const PADDING_WIDTH: &str = "paddingWidth";
pub const PADDING_COLOR: &str = "paddingColor";
pub const BORDER_WIDTH: &str = "borderWidth";
pub const BORDER_COLOR: &str = "borderColor";
pub const MARGIN: &str = "margin";

// DropShadow plugin
pub const SHADOW_WIDTH: &str = "shadowwidth";
pub const SHADOW_COLOR: &str = "shadowcolor";
pub const SHADOW_OFFSET: &str = "shadowoffset";

// =============================================================================
// Output
// =============================================================================

pub const FORMAT: &str = "format";
pub const QUALITY: &str = "quality";
pub const SPEED: &str = "speed";
pub const COLORS: &str = "colors";

// =============================================================================
// SimpleFilters plugin
// =============================================================================

pub const GRAYSCALE: &str = "s.grayscale";
pub const SEPIA: &str = "s.sepia";
pub const ALPHA: &str = "s.alpha";
pub const BRIGHTNESS: &str = "s.brightness";
pub const CONTRAST: &str = "s.contrast";
pub const SATURATION: &str = "s.saturation";
pub const INVERT: &str = "s.invert";
pub const ROUND_CORNERS: &str = "s.roundcorners";

// =============================================================================
// Gradient plugin
// =============================================================================

pub const GRADIENT_WIDTH: &str = "width";
pub const GRADIENT_HEIGHT: &str = "height";
pub const COLOR1: &str = "color1";
pub const COLOR2: &str = "color2";
pub const ANGLE: &str = "angle";

// =============================================================================
// Miscellaneous
// =============================================================================

pub const WATERMARK: &str = "watermark";
pub const IMAGE_404: &str = "404";
pub const PRESET: &str = "preset";
pub const IGNORE_ICC: &str = "ignoreicc";
pub const CACHE: &str = "cache";
pub const PROCESS: &str = "process";
pub const DPI: &str = "dpi";

/// Value written by flag-style commands
pub const FLAG_TRUE: &str = "true";
