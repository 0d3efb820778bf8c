//! URL modifier pipeline
//!
//! Modifiers are pure `&str -> String` rewrites applied after the query string
//! has been assembled. They run in registration order, each one receiving the
//! previous one's output:
//!
//! ```text
//! "image.jpg" -> [s3 prefix] -> "/s3/image.jpg" -> [lower case] -> ...
//! ```
//!
//! The pipeline does not guard modifiers. A panicking modifier unwinds to the
//! caller of `build`.

pub mod storage;

use std::fmt;
use std::sync::Arc;

/// A registered path rewrite
pub type Modifier = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Ordered list of modifiers
#[derive(Clone, Default)]
pub struct ModifierPipeline {
    modifiers: Vec<Modifier>,
}

impl ModifierPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    pub fn clear(&mut self) {
        self.modifiers.clear();
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Thread `input` through every modifier, first-registered first
    pub fn apply(&self, input: &str) -> String {
        self.modifiers
            .iter()
            .fold(input.to_string(), |current, modifier| modifier(&current))
    }
}

impl fmt::Debug for ModifierPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierPipeline")
            .field("modifiers", &self.modifiers.len())
            .finish()
    }
}

/// Converts generated URLs to lower case
pub fn lower_case() -> Modifier {
    Arc::new(|s: &str| s.to_lowercase())
}
