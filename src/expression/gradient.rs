//! Gradient plugin options
//!
//! Produces a generated gradient PNG instead of resizing a source image.

use super::{require_in_range, require_positive};
use crate::catalog::commands;
use crate::error::{require_non_empty, Result};
use crate::params::ParameterStore;

#[derive(Debug)]
pub struct GradientExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> GradientExpression<'a> {
    pub(crate) fn new(store: &'a mut ParameterStore) -> Self {
        Self { store }
    }

    pub fn dimensions(self, width: u32, height: u32) -> Result<Self> {
        require_positive(commands::GRADIENT_WIDTH, width)?;
        require_positive(commands::GRADIENT_HEIGHT, height)?;

        self.store
            .set_command(commands::GRADIENT_WIDTH, width.to_string());
        self.store
            .set_command(commands::GRADIENT_HEIGHT, height.to_string());
        Ok(self)
    }

    /// Named colors or 6/8-digit hex (the last two digits of 8 are alpha)
    pub fn colors(self, from: &str, to: &str) -> Result<Self> {
        require_non_empty(commands::COLOR1, from)?;
        require_non_empty(commands::COLOR2, to)?;

        self.store.set_command(commands::COLOR1, from.to_string());
        self.store.set_command(commands::COLOR2, to.to_string());
        Ok(self)
    }

    /// Gradient angle in degrees
    pub fn angle(self, degrees: u32) -> Result<Self> {
        require_in_range(commands::ANGLE, degrees, 0..=360)?;
        self.store.set_command(commands::ANGLE, degrees.to_string());
        Ok(self)
    }
}
