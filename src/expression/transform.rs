//! Rotation and flipping

use crate::catalog::{commands, FlipType, RotateType};
use crate::params::ParameterStore;

#[derive(Debug)]
pub struct TransformExpression<'a> {
    store: &'a mut ParameterStore,
}

impl<'a> TransformExpression<'a> {
    pub(crate) fn new(store: &'a mut ParameterStore) -> Self {
        Self { store }
    }

    /// Rotates according to the camera's EXIF orientation
    pub fn auto_rotate(self) -> Self {
        self.store
            .set_command(commands::AUTO_ROTATE, commands::FLAG_TRUE);
        self
    }

    /// Rotates the source before processing, in 90 degree steps
    pub fn rotate(self, rotation: RotateType) -> Self {
        self.store
            .set_command(commands::ROTATE_INTERVAL, rotation.as_str());
        self
    }

    /// Rotates by an arbitrary angle after cropping
    pub fn rotate_degrees(self, degrees: u32) -> Self {
        self.store
            .set_command(commands::ROTATE_DEGREES, degrees.to_string());
        self
    }

    /// Flips the source before processing
    pub fn flip_before(self, flip: FlipType) -> Self {
        self.store.set_command(commands::FLIP_BEFORE, flip.as_str());
        self
    }

    /// Flips the result after everything else is done
    pub fn flip_after(self, flip: FlipType) -> Self {
        self.store.set_command(commands::FLIP_AFTER, flip.as_str());
        self
    }
}
