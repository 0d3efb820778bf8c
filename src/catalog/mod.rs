//! Command catalog
//!
//! Static mapping from typed options to the wire tokens the resizing endpoint
//! expects. Command names live in [`commands`]; each option enum exposes its
//! token through `as_str`.
//!
//! ```text
//! FitMode::Crop          -> mode=crop
//! AnchorPoint::TopLeft   -> anchor=topleft
//! RotateType::Rotate180  -> srotate=180
//! ```

pub mod commands;

/// Resize strategy when both dimensions are given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Behaves like maxwidth/maxheight
    Max,
    /// Adds whitespace to resolve aspect-ratio conflicts
    Pad,
    /// Crops to fill the requested box
    Crop,
    /// Stretches, losing aspect ratio
    Stretch,
}

impl FitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Pad => "pad",
            Self::Crop => "crop",
            Self::Stretch => "stretch",
        }
    }
}

/// Which direction the image may be scaled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    UpscaleOnly,
    DownscaleOnly,
    Both,
    /// Scales down, adds a margin instead of scaling up
    UpscaleCanvas,
}

impl ScaleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpscaleOnly => "upscaleonly",
            Self::DownscaleOnly => "downscaleonly",
            Self::Both => "both",
            Self::UpscaleCanvas => "upscalecanvas",
        }
    }
}

/// Anchor point used when padding or cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPoint {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl AnchorPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopCenter => "topcenter",
            Self::TopRight => "topright",
            Self::MiddleLeft => "middleleft",
            Self::MiddleCenter => "middlecenter",
            Self::MiddleRight => "middleright",
            Self::BottomLeft => "bottomleft",
            Self::BottomCenter => "bottomcenter",
            Self::BottomRight => "bottomright",
        }
    }
}

/// Source rotation in 90 degree intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateType {
    None,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl RotateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Rotate90 => "90",
            Self::Rotate180 => "180",
            Self::Rotate270 => "270",
        }
    }
}

/// Flip axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipType {
    None,
    X,
    Y,
    XY,
}

impl FlipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::X => "x",
            Self::Y => "y",
            Self::XY => "xy",
        }
    }
}

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpg,
    Png,
    Gif,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }

}

/// Grayscale algorithm for the SimpleFilters plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleOptions {
    Ry,
    Bt709,
    Flat,
}

impl GrayscaleOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ry => "ry",
            Self::Bt709 => "bt709",
            Self::Flat => "flat",
        }
    }
}

/// Disk caching behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheOptions {
    #[default]
    Default,
    /// Cache even if the image was not modified
    Always,
    /// Never cache
    No,
}

impl CacheOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Always => "always",
            Self::No => "no",
        }
    }
}

/// Re-encoding behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessOptions {
    #[default]
    Default,
    /// Re-encode even if nothing changed
    Always,
    /// Never modify the image
    No,
}

impl ProcessOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Always => "always",
            Self::No => "no",
        }
    }
}

/// Print resolution embedded in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpiOptions {
    Dpi90,
    Dpi300,
    Dpi600,
}

impl DpiOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dpi90 => "90",
            Self::Dpi300 => "300",
            Self::Dpi600 => "600",
        }
    }
}
