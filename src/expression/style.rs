//! Background, padding, border, margin and drop shadow

use super::{join_values, require_positive};
use crate::catalog::commands;
use crate::error::{require_non_empty, Result};
use crate::params::ParameterStore;

/// Style options
///
/// Colors are a color name or a hex code such as `FFFFFF`. They are passed
/// through as given.
#[derive(Debug)]
pub struct StyleExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> StyleExpression<'a> {
    pub(crate) fn new(store: &'a mut ParameterStore) -> Self {
        Self { store }
    }

    pub fn background_color(self, color: &str) -> Result<Self> {
        self.color(commands::BACKGROUND_COLOR, color)
    }

    pub fn padding_width(self, width: u32) -> Self {
        self.store
            .set_command(commands::PADDING_WIDTH, width.to_string());
        self
    }

    /// Defaults to the background color on the endpoint
    pub fn padding_color(self, color: &str) -> Result<Self> {
        self.color(commands::PADDING_COLOR, color)
    }

    pub fn border_width(self, width: u32) -> Self {
        self.store
            .set_command(commands::BORDER_WIDTH, width.to_string());
        self
    }

    pub fn border_color(self, color: &str) -> Result<Self> {
        self.color(commands::BORDER_COLOR, color)
    }

    /// Uniform margin in pixels
    pub fn margin(self, width: u32) -> Self {
        self.store.set_command(commands::MARGIN, width.to_string());
        self
    }

    /// Per-side margins, written as `left,top,right,bottom`
    pub fn margins(self, left: u32, top: u32, right: u32, bottom: u32) -> Self {
        self.store
            .set_command(commands::MARGIN, join_values(&[left, top, right, bottom]));
        self
    }

    /// Adds a drop shadow `width` pixels wide
    pub fn drop_shadow(self, width: u32, color: &str) -> Result<DropShadowExpression<'a>> {
        require_positive(commands::SHADOW_WIDTH, width)?;
        require_non_empty(commands::SHADOW_COLOR, color)?;

        self.store
            .set_command(commands::SHADOW_WIDTH, width.to_string());
        self.store
            .set_command(commands::SHADOW_COLOR, color.to_string());
        Ok(DropShadowExpression { store: self.store })
    }

    fn color(self, name: &'static str, color: &str) -> Result<Self> {
        require_non_empty(name, color)?;
        self.store.set_command(name, color.to_string());
        Ok(self)
    }
}

/// Shadow placement, reachable only after `drop_shadow`
#[derive(Debug)]
pub struct DropShadowExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> DropShadowExpression<'a> {
    /// How far the shadow is offset from the image, as depth and angle
    pub fn offset(self, depth: u32, angle: u32) -> StyleExpression<'a> {
        self.store
            .set_command(commands::SHADOW_OFFSET, join_values(&[depth, angle]));
        StyleExpression::new(self.store)
    }

    /// Keep the endpoint's default offset
    pub fn style(self) -> StyleExpression<'a> {
        StyleExpression::new(self.store)
    }
}
