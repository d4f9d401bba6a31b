use indexmap::IndexMap;
use serde::Deserialize;

/// Path mapping key whose value is selected when nothing else matched.
pub const FALLBACK_CODE_PATH: &str = "_fallback_code_path_";

/// Separator between test classes inside one mapping value.
pub const TEST_CLASS_SEPARATOR: char = ';';

/// Ordered `key -> test classes` table.
///
/// Entries keep their declaration order; lookups scan linearly so the first
/// declared key wins wherever first-match semantics apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, String>")]
pub struct SuiteMapping {
    entries: Vec<(String, String)>,
}

impl SuiteMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key`, or replaces its value in place when already present.
    pub fn insert(&mut self, key: impl Into<String>, classes: impl Into<String>) {
        let key = key.into();
        let classes = classes.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = classes,
            None => self.entries.push((key, classes)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `other` override or extend `self`.
    pub fn merge(&mut self, other: &SuiteMapping) {
        other.iter().for_each(|(k, v)| self.insert(k, v));
    }
}

impl From<IndexMap<String, String>> for SuiteMapping {
    fn from(map: IndexMap<String, String>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SuiteMapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = SuiteMapping::new();
        iter.into_iter().for_each(|(k, v)| mapping.insert(k, v));
        mapping
    }
}

/// Splits a mapping value into its non-empty class names.
pub fn split_classes(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(TEST_CLASS_SEPARATOR)
        .map(str::trim)
        .filter(|class| !class.is_empty())
}

/// Parses a `key=value` CLI mapping entry. The key is everything before the
/// first `=`.
pub fn parse_mapping_entry(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}
