//! Commands that don't belong to an operation family
//!
//! These are set directly on the builder:
//!
//! ```text
//! builder.watermark("logo")?.cache(CacheOptions::Always).dpi(DpiOptions::Dpi300);
//! ```

use crate::builder::ImageUrlBuilder;
use crate::catalog::{commands, CacheOptions, DpiOptions, ProcessOptions};
use crate::error::{require_non_empty, Result};

impl ImageUrlBuilder {
    /// Names of one or more watermark layers or layer groups, comma-separated
    pub fn watermark(&mut self, names: &str) -> Result<&mut Self> {
        self.named(commands::WATERMARK, names)
    }

    /// Fallback image path, or a preset name, used when the source is missing
    pub fn image_404(&mut self, fallback: &str) -> Result<&mut Self> {
        self.named(commands::IMAGE_404, fallback)
    }

    /// Named setting groups defined on the endpoint, e.g. `thumb,grey`
    pub fn presets(&mut self, presets: &str) -> Result<&mut Self> {
        self.named(commands::PRESET, presets)
    }

    /// Ignores the ICC profile embedded in the source
    pub fn ignore_icc(&mut self) -> &mut Self {
        self.store_mut()
            .set_command(commands::IGNORE_ICC, commands::FLAG_TRUE);
        self
    }

    pub fn cache(&mut self, option: CacheOptions) -> &mut Self {
        self.store_mut().set_command(commands::CACHE, option.as_str());
        self
    }

    pub fn process(&mut self, option: ProcessOptions) -> &mut Self {
        self.store_mut()
            .set_command(commands::PROCESS, option.as_str());
        self
    }

    pub fn dpi(&mut self, option: DpiOptions) -> &mut Self {
        self.store_mut().set_command(commands::DPI, option.as_str());
        self
    }

    fn named(&mut self, name: &'static str, value: &str) -> Result<&mut Self> {
        require_non_empty(name, value)?;
        self.store_mut().set_command(name, value.to_string());
        Ok(self)
    }
}
