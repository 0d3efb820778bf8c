//! Output format and encoder settings

use super::require_in_range;
use crate::catalog::{commands, OutputFormat};
use crate::error::Result;
use crate::params::ParameterStore;

#[derive(Debug)]
pub struct OutputExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> OutputExpression<'a> {
    pub(crate) fn new(store: &'a mut ParameterStore) -> Self {
        Self { store }
    }

    /// Output format; the source format (or closest match) is used otherwise
    pub fn format(self, format: OutputFormat) -> Self {
        self.store.set_command(commands::FORMAT, format.as_str());
        self
    }

    /// Jpeg quality: 100 best, 90 a good balance, 0 ugly
    pub fn quality(self, quality: u32) -> Result<Self> {
        self.ranged(commands::QUALITY, quality, 0, 100)
    }

    /// Speed/quality trade-off, 0 (best quality) to 3 (fastest)
    pub fn speed(self, speed: u32) -> Result<Self> {
        self.ranged(commands::SPEED, speed, 0, 3)
    }

    /// Palette size for gif and 8-bit png output
    pub fn colors(self, colors: u32) -> Result<Self> {
        self.ranged(commands::COLORS, colors, 2, 255)
    }

    fn ranged(self, name: &'static str, value: u32, min: u32, max: u32) -> Result<Self> {
        require_in_range(name, value, min..=max)?;
        self.store.set_command(name, value.to_string());
        Ok(self)
    }
}
