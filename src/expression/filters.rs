//! SimpleFilters plugin options
//!
//! Adjustments take a float in a fixed interval:
//!
//! | Filter     | Command        | Range     |
//! |------------|----------------|-----------|
//! | alpha      | `s.alpha`      | 0 to 1    |
//! | brightness | `s.brightness` | -1 to 1   |
//! | contrast   | `s.contrast`   | -1 to 1   |
//! | saturation | `s.saturation` | -1 to 1   |
//!
//! Rounded corners are percentages (0-100) of half the smaller side.

use super::{join_values, require_in_range};
use crate::catalog::{commands, GrayscaleOptions};
use crate::error::Result;
use crate::params::ParameterStore;

#[derive(Debug)]
pub struct SimpleFiltersExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> SimpleFiltersExpression<'a> {
    pub(crate) fn new(store: &'a mut ParameterStore) -> Self {
        Self { store }
    }

    /// Default (NTSC) grayscale
    pub fn grayscale(self) -> Self {
        self.flag(commands::GRAYSCALE)
    }

    pub fn grayscale_variant(self, variant: GrayscaleOptions) -> Self {
        self.store.set_command(commands::GRAYSCALE, variant.as_str());
        self
    }

    pub fn sepia(self) -> Self {
        self.flag(commands::SEPIA)
    }

    /// 0 is fully transparent, 1 opaque. Combine with png output for real transparency.
    pub fn alpha(self, adjustment: f64) -> Result<Self> {
        self.adjust(commands::ALPHA, adjustment, 0.0)
    }

    pub fn brightness(self, adjustment: f64) -> Result<Self> {
        self.adjust(commands::BRIGHTNESS, adjustment, -1.0)
    }

    pub fn contrast(self, adjustment: f64) -> Result<Self> {
        self.adjust(commands::CONTRAST, adjustment, -1.0)
    }

    pub fn saturate(self, adjustment: f64) -> Result<Self> {
        self.adjust(commands::SATURATION, adjustment, -1.0)
    }

    pub fn invert(self) -> Self {
        self.flag(commands::INVERT)
    }

    pub fn rounded_corners(self, radius_percentage: u32) -> Result<Self> {
        require_in_range(commands::ROUND_CORNERS, radius_percentage, 0..=100)?;
        self.store
            .set_command(commands::ROUND_CORNERS, radius_percentage.to_string());
        Ok(self)
    }

    /// Per-corner radii, clockwise from the top left
    pub fn rounded_corners_each(
        self,
        top_left: u32,
        top_right: u32,
        bottom_right: u32,
        bottom_left: u32,
    ) -> Result<Self> {
        let corners = [top_left, top_right, bottom_right, bottom_left];
        for corner in corners {
            require_in_range(commands::ROUND_CORNERS, corner, 0..=100)?;
        }
        self.store
            .set_command(commands::ROUND_CORNERS, join_values(&corners));
        Ok(self)
    }

    fn flag(self, name: &'static str) -> Self {
        self.store.set_command(name, commands::FLAG_TRUE);
        self
    }

    fn adjust(self, name: &'static str, adjustment: f64, min: f64) -> Result<Self> {
        require_in_range(name, adjustment, min..=1.0)?;
        self.store.set_command(name, adjustment.to_string());
        Ok(self)
    }
}
