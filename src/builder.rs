//! Image URL builder
//!
//! Owns the parameter store and the modifier pipeline of one build session.
//! Configuration happens through short-lived expressions borrowed from the
//! builder:
//!
//! ```
//! use resizer_url::{AnchorPoint, ImageUrlBuilder, OutputFormat};
//!
//! let mut builder = ImageUrlBuilder::new();
//! builder.resize().dimensions(200, 100)?.crop().anchor(AnchorPoint::TopLeft);
//! builder.output().format(OutputFormat::Png).quality(90)?;
//!
//! assert_eq!(
//!     builder.build("image.jpg")?,
//!     "image.jpg?width=200&height=100&mode=crop&anchor=topleft&format=png&quality=90"
//! );
//! # Ok::<(), resizer_url::UrlBuilderError>(())
//! ```

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig, UrlConfig};
use crate::constants::DEFAULT_APP_VIRTUAL_PATH;
use crate::error::{require_non_empty, Result};
use crate::expression::{
    GradientExpression, OutputExpression, ResizeExpression, SimpleFiltersExpression,
    StyleExpression, TransformExpression,
};
use crate::modifier::{self, storage, Modifier, ModifierPipeline};
use crate::params::{append_to_path, ParameterStore};
use crate::url::ImageUrl;

#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    store: ParameterStore,
    modifiers: ModifierPipeline,
    app_virtual_path: String,
    storage: StorageConfig,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageUrlBuilder {
    pub fn new() -> Self {
        Self {
            store: ParameterStore::new(),
            modifiers: ModifierPipeline::new(),
            app_virtual_path: DEFAULT_APP_VIRTUAL_PATH.to_string(),
            storage: StorageConfig::default(),
        }
    }

    /// Create a builder from application configuration
    ///
    /// Registers the lower-case modifier and the default storage backend when
    /// the configuration asks for them.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration fails validation.
    pub fn from_config(config: &UrlConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self {
            app_virtual_path: config.app_virtual_path.clone(),
            storage: config.storage.clone(),
            ..Self::new()
        };
        if let Some(backend) = config.storage.default_backend {
            builder.from_configured_storage(backend)?;
        }
        if config.lowercase_urls {
            builder.lower_case();
        }
        Ok(builder)
    }

    pub fn app_virtual_path(&self) -> &str {
        &self.app_virtual_path
    }

    /// Base path that storage modifiers registered afterwards root paths at
    pub fn set_app_virtual_path(&mut self, path: &str) -> Result<&mut Self> {
        require_non_empty("app_virtual_path", path)?;
        self.app_virtual_path = path.to_string();
        Ok(self)
    }

    // === Expressions ===

    pub fn resize(&mut self) -> ResizeExpression<'_> {
        ResizeExpression::new(&mut self.store)
    }

    pub fn transform(&mut self) -> TransformExpression<'_> {
        TransformExpression::new(&mut self.store)
    }

    pub fn style(&mut self) -> StyleExpression<'_> {
        StyleExpression::new(&mut self.store)
    }

    pub fn output(&mut self) -> OutputExpression<'_> {
        OutputExpression::new(&mut self.store)
    }

    pub fn simple_filters(&mut self) -> SimpleFiltersExpression<'_> {
        SimpleFiltersExpression::new(&mut self.store)
    }

    pub fn gradient(&mut self) -> GradientExpression<'_> {
        GradientExpression::new(&mut self.store)
    }

    // === Parameters ===

    /// Set a raw command value
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` or `value` is empty.
    pub fn set_parameter(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.store.set(name, value)?;
        Ok(self)
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.store.get(name)
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut ParameterStore {
        &mut self.store
    }

    // === Modifiers ===

    /// Register a path rewrite, run after every previously registered one
    pub fn add_modifier<F>(&mut self, modifier: F) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.push_modifier(Arc::new(modifier))
    }

    pub fn push_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.push(modifier);
        self
    }

    /// Remove every modifier; configured parameters are kept
    pub fn clear_modifiers(&mut self) -> &mut Self {
        self.modifiers.clear();
        self
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    pub fn lower_case(&mut self) -> &mut Self {
        self.push_modifier(modifier::lower_case())
    }

    /// Route through the S3 reader under `/{prefix}/{bucket}`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `prefix` is empty.
    pub fn from_s3(&mut self, prefix: &str, bucket: Option<&str>) -> Result<&mut Self> {
        let modifier = storage::s3(&self.app_virtual_path, prefix, bucket)?;
        Ok(self.push_modifier(modifier))
    }

    /// Route through the Azure reader under `/{prefix}/{container}`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `prefix` is empty.
    pub fn from_azure(&mut self, prefix: &str, container: Option<&str>) -> Result<&mut Self> {
        let modifier = storage::azure(&self.app_virtual_path, prefix, container)?;
        Ok(self.push_modifier(modifier))
    }

    /// Route absolute URLs through the remote reader
    ///
    /// Paths passed to `build` must be absolute, e.g. `http://host/a.jpg`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `prefix` is empty.
    pub fn from_remote(&mut self, prefix: &str) -> Result<&mut Self> {
        let modifier = storage::remote(&self.app_virtual_path, prefix)?;
        Ok(self.push_modifier(modifier))
    }

    /// Register a backend using the prefixes from configuration
    pub fn from_configured_storage(&mut self, backend: StorageBackend) -> Result<&mut Self> {
        let storage = self.storage.clone();
        match backend {
            StorageBackend::Remote => self.from_remote(&storage.remote.prefix),
            StorageBackend::S3 => self.from_s3(&storage.s3.prefix, storage.s3.bucket.as_deref()),
            StorageBackend::Azure => self.from_azure(
                &storage.azure.prefix,
                storage.azure.container.as_deref(),
            ),
        }
    }

    // === Building ===

    /// Serialize the configuration onto `path` and apply all modifiers
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty.
    pub fn build(&self, path: &str) -> Result<String> {
        let serialized = self.serialize(path)?;
        let modified = self.modifiers.apply(&serialized);

        tracing::trace!(
            path = %path,
            result = %modified,
            modifiers = self.modifiers.len(),
            "Built image URL"
        );

        Ok(modified)
    }

    /// Like [`build`](Self::build), wrapped in an [`ImageUrl`] handle
    ///
    /// The handle applies the builder's modifiers lazily and lower-cases the
    /// final value.
    pub fn build_url(&self, path: &str) -> Result<ImageUrl> {
        let serialized = self.serialize(path)?;
        Ok(ImageUrl::with_pipeline(serialized, self.modifiers.clone()))
    }

    fn serialize(&self, path: &str) -> Result<String> {
        require_non_empty("path", path)?;

        let serialized = append_to_path(path, &self.store);
        tracing::debug!(
            parameters = self.store.len(),
            serialized = %serialized,
            "Serialized image parameters"
        );
        Ok(serialized)
    }
}
