//! Resize and alignment options

use super::{join_values, require_positive};
use crate::catalog::{commands, AnchorPoint, FitMode, ScaleMode};
use crate::error::{Result, UrlBuilderError};
use crate::params::ParameterStore;

/// Resize options: dimensions, fit mode, scale mode, zoom and source crop
#[derive(Debug)]
pub struct ResizeExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> ResizeExpression<'a> {
    pub(crate) fn new(store: &'a mut ParameterStore) -> Self {
        Self { store }
    }

    /// Sets width then height
    pub fn dimensions(self, width: u32, height: u32) -> Result<Self> {
        self.width(width)?.height(height)
    }

    /// Target width in pixels; aspect ratio is kept unless a fit mode says otherwise
    pub fn width(self, width: u32) -> Result<Self> {
        self.positive(commands::WIDTH, width)
    }

    pub fn height(self, height: u32) -> Result<Self> {
        self.positive(commands::HEIGHT, height)
    }

    /// Upper bound on width; keeps aspect ratio without padding
    pub fn max_width(self, max_width: u32) -> Result<Self> {
        self.positive(commands::MAX_WIDTH, max_width)
    }

    pub fn max_height(self, max_height: u32) -> Result<Self> {
        self.positive(commands::MAX_HEIGHT, max_height)
    }

    pub fn max(self) -> Self {
        self.fit(FitMode::Max)
    }

    /// Adds whitespace to resolve aspect-ratio conflicts
    pub fn pad(self) -> AlignmentExpression<'a> {
        AlignmentExpression::new(self.fit(FitMode::Pad).store)
    }

    pub fn crop(self) -> AlignmentExpression<'a> {
        AlignmentExpression::new(self.fit(FitMode::Crop).store)
    }

    pub fn stretch(self) -> Self {
        self.fit(FitMode::Stretch)
    }

    pub fn scale_up(self) -> Self {
        self.scale(ScaleMode::UpscaleOnly)
    }

    pub fn scale_down(self) -> Self {
        self.scale(ScaleMode::DownscaleOnly)
    }

    pub fn scale_both(self) -> Self {
        self.scale(ScaleMode::Both)
    }

    /// Scales down, and pads instead of scaling up
    pub fn scale_canvas(self) -> AlignmentExpression<'a> {
        AlignmentExpression::new(self.scale(ScaleMode::UpscaleCanvas).store)
    }

    /// Multiplies the output size; 0.5 halves it, 2 doubles it
    pub fn zoom(self, multiplier: f64) -> Result<Self> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(UrlBuilderError::out_of_range(
                commands::ZOOM,
                "the zoom multiplier must be greater than 0",
            ));
        }
        self.store.set_command(commands::ZOOM, multiplier.to_string());
        Ok(self)
    }

    /// Crops the source image to the rectangle `(x1, y1)`-`(x2, y2)`
    ///
    /// Negative coordinates are measured from the far edge, and a second
    /// coordinate of `0` means the far edge itself. Per axis, ordering is only
    /// enforced when both coordinates use the same form:
    ///
    /// - absolute (`c1 >= 0`, `c2 > 0`): `c1 < c2`
    /// - relative (`c1 < 0`, `c2 < 0`): `c1 < c2`
    ///
    /// Mixed forms depend on the source size and are passed through.
    pub fn crop_region(self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self> {
        let rect = (x1, y1, x2, y2);
        if let Some(reason) = axis_violation("x", x1, x2).or_else(|| axis_violation("y", y1, y2)) {
            return Err(UrlBuilderError::malformed_rectangle(rect, reason));
        }
        self.store
            .set_command(commands::CROP, join_values(&[x1, y1, x2, y2]));
        Ok(self)
    }

    fn positive(self, name: &'static str, value: u32) -> Result<Self> {
        require_positive(name, value)?;
        self.store.set_command(name, value.to_string());
        Ok(self)
    }

    fn fit(self, mode: FitMode) -> Self {
        self.store.set_command(commands::MODE, mode.as_str());
        self
    }

    fn scale(self, mode: ScaleMode) -> Self {
        self.store.set_command(commands::SCALE, mode.as_str());
        self
    }
}

fn axis_violation(axis: &str, c1: i32, c2: i32) -> Option<String> {
    let both_absolute = c1 >= 0 && c2 > 0;
    let both_relative = c1 < 0 && c2 < 0;
    if (both_absolute || both_relative) && c1 >= c2 {
        return Some(format!("{axis}1 must be less than {axis}2"));
    }
    None
}

/// Anchor selection, reachable only after pad, crop or scale_canvas
#[derive(Debug)]
pub struct AlignmentExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> AlignmentExpression<'a> {
    fn new(store: &'a mut ParameterStore) -> Self {
        Self { store }
    }

    /// How to anchor the image when padding or cropping
    pub fn anchor(self, anchor: AnchorPoint) -> ResizeExpression<'a> {
        self.store.set_command(commands::ANCHOR, anchor.as_str());
        ResizeExpression::new(self.store)
    }

    /// Leave the anchor at the endpoint's default
    pub fn resize(self) -> ResizeExpression<'a> {
        ResizeExpression::new(self.store)
    }
}
