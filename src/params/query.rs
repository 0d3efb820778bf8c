//! Query string assembly
//!
//! Merges a [`ParameterStore`] into the query string a path may already carry.
//! Existing keys come first, store keys after them, and the store value wins
//! when a key appears in both.
//!
//! Values are form-encoded with lower-case hex escapes, so a comma-joined list
//! travels as one value:
//!
//! ```text
//! margin=10,5,10,5  ->  margin=10%2c5%2c10%2c5
//! ```

use super::store::ParameterStore;

/// Ordered key/value pairs of a query string
///
/// Bare segments without `=` are kept as flags (`None` value) and written
/// back without `=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryPairs {
    /// Parse a raw query string (without the leading `?`)
    ///
    /// Empty segments are skipped. Values are percent-decoded. A key that
    /// repeats keeps its first position and collects its values comma-joined.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            match segment.split_once('=') {
                Some((key, value)) => parsed.append(key, decode_value(value)),
                None => {
                    if !parsed.contains(segment) {
                        parsed.pairs.push((segment.to_string(), None));
                    }
                }
            }
        }
        parsed
    }

    /// Overlay store entries; store values replace existing ones in place
    pub fn merge(&mut self, store: &ParameterStore) {
        for (name, value) in store.iter() {
            match self.pairs.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = Some(value.to_string()),
                None => self.pairs.push((name.to_string(), Some(value.to_string()))),
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize as `key=value&key=value` with encoded values
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| match value {
                Some(value) => format!("{}={}", key, encode_value(value)),
                None => key.clone(),
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    fn append(&mut self, key: &str, value: String) {
        match self.pairs.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, Some(existing))) => {
                existing.push(',');
                existing.push_str(&value);
            }
            Some((_, slot)) => *slot = Some(value),
            None => self.pairs.push((key.to_string(), Some(value))),
        }
    }
}

impl From<&ParameterStore> for QueryPairs {
    fn from(store: &ParameterStore) -> Self {
        let mut pairs = Self::default();
        pairs.merge(store);
        pairs
    }
}

/// Split a path at its first `?`
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (path, None),
    }
}

/// Append the store to `path`, merging any query the path already carries
///
/// Returns `path` unchanged when the store is empty.
pub fn append_to_path(path: &str, store: &ParameterStore) -> String {
    if store.is_empty() {
        return path.to_string();
    }

    let (base, existing) = split_path(path);
    let pairs = match existing {
        Some(query) => {
            let mut pairs = QueryPairs::parse(query);
            pairs.merge(store);
            pairs
        }
        None => QueryPairs::from(store),
    };

    format!("{}?{}", base, pairs.to_query_string())
}

/// Form-encode a query value
///
/// Spaces become `+` and escapes use lower-case hex digits. Only
/// `A-Z a-z 0-9 - . _ ~` pass through unescaped, so `!*()` are escaped and
/// `~` is not. Endpoints that compare against form-encoded output where the
/// opposite holds should decode before comparing.
pub fn encode_value(value: &str) -> String {
    let encoded = urlencoding::encode(value).replace("%20", "+");

    let mut output = String::with_capacity(encoded.len());
    let mut hex_digits_left = 0;
    for c in encoded.chars() {
        if hex_digits_left > 0 {
            output.push(c.to_ascii_lowercase());
            hex_digits_left -= 1;
        } else {
            if c == '%' {
                hex_digits_left = 2;
            }
            output.push(c);
        }
    }
    output
}

/// Decode a form-encoded query value, keeping the raw text if it is not UTF-8
pub fn decode_value(value: &str) -> String {
    let spaced = value.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
