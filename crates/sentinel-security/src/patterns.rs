//! Classifier pattern registry

/// Built-in classifiers in declaration order.
///
/// `CVV` and `ATM_PIN` match any bare 3 or 4-6 digit number, so years and
/// counts in ordinary prose are reported too.
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("AADHAAR", r"\b\d{4}[\s\-]?\d{4}[\s\-]?\d{4}\b"),
    ("PAN", r"\b[A-Z]{5}[0-9]{4}[A-Z]{1}\b"),
    ("PASSPORT", r"\b[A-Z]{1}[0-9]{7}\b"),
    ("EMAIL", r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b"),
    ("PHONE", r"\b(\+91[\-\s]?)?[6789]\d{9}\b"),
    ("VOTER_ID", r"\b[A-Z]{3}[0-9]{7}\b"),
    ("GSTIN", r"\b[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}\b"),
    ("ATM_PIN", r"\b\d{4,6}\b"),
    ("CREDIT_CARD", r"\b\d{4}[\s\-]?\d{4}[\s\-]?\d{4}[\s\-]?\d{4}\b"),
    ("CVV", r"\b\d{3}\b"),
    ("DOB", r"\b\d{2}[\-/\.]\d{2}[\-/\.]\d{4}\b"),
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_PATTERNS.iter().any(|(builtin, _)| *builtin == name)
}

/// Ordered mapping of classifier name to pattern text.
///
/// Names are unique. Inserting an existing name replaces its pattern in
/// place; new names are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRegistry {
    entries: Vec<(String, String)>,
}

impl PatternRegistry {
    /// A registry holding only the built-in classifiers
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PATTERNS
                .iter()
                .map(|(name, pattern)| (name.to_string(), pattern.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or replace a rule. Returns the pattern it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) -> Option<String> {
        let name = name.into();
        let pattern = pattern.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, current)) => Some(std::mem::replace(current, pattern)),
            None => {
                self.entries.push((name, pattern));
                None
            }
        }
    }

    /// Merge `custom` over this registry, entry by entry
    pub fn extend<I, K, V>(&mut self, custom: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, pattern) in custom {
            self.insert(name, pattern);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, pattern)| pattern.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, pattern)| (name.as_str(), pattern.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in classifiers with `custom` merged over them by name.
///
/// Patterns are not validated here; a malformed one is skipped at scan time.
pub fn effective_patterns<I, K, V>(custom: I) -> PatternRegistry
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut registry = PatternRegistry::builtin();
    registry.extend(custom);
    registry
}
