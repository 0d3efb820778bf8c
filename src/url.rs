//! Final image URL handle
//!
//! Wraps the serialized path together with the modifiers still to be applied.
//! The final string is computed on first read, lower-cased, and cached until
//! another modifier is added.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{require_non_empty, Result};
use crate::modifier::ModifierPipeline;

#[derive(Debug, Clone)]
pub struct ImageUrl {
    original: String,
    modifiers: ModifierPipeline,
    computed: OnceLock<String>,
}

impl ImageUrl {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty.
    pub fn new(path: &str) -> Result<Self> {
        require_non_empty("path", path)?;
        Ok(Self::with_pipeline(path.to_string(), ModifierPipeline::new()))
    }

    pub(crate) fn with_pipeline(original: String, modifiers: ModifierPipeline) -> Self {
        Self {
            original,
            modifiers,
            computed: OnceLock::new(),
        }
    }

    /// Path before any modifier ran
    pub fn original_path(&self) -> &str {
        &self.original
    }

    pub fn add_modifier<F>(&mut self, modifier: F) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.modifiers.push(Arc::new(modifier));
        self.computed = OnceLock::new();
        self
    }

    pub fn as_str(&self) -> &str {
        self.computed
            .get_or_init(|| self.modifiers.apply(&self.original).to_lowercase())
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ImageUrl {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ImageUrl {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
