//! Ordered parameter store
//!
//! One store backs one build session. Writes are last-write-wins per key while
//! the key keeps the position of its first insertion, so serialization order
//! follows the order in which commands were first configured.

use crate::error::{require_non_empty, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterStore {
    entries: Vec<(String, String)>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a command value
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either `name` or `value` is empty.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        let value = value.into();
        require_non_empty("parameter name", &name)?;
        require_non_empty("parameter value", &value)?;

        self.upsert(name, value);
        Ok(())
    }

    /// Write a catalog command whose name and value are known to be non-empty
    pub(crate) fn set_command(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        debug_assert!(!name.is_empty() && !value.is_empty());
        self.upsert(name.to_string(), value);
    }

    fn upsert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
