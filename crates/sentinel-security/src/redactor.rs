use lazy_static::lazy_static;
use sentinel_core::{Detection, SkippedRule};

use crate::patterns::{BUILTIN_PATTERNS, PatternRegistry, effective_patterns};

/// Character written over every detected position
pub const MASK_CHAR: char = '*';

lazy_static! {
    static ref BUILTIN_RULES: Vec<CompiledRule> = BUILTIN_PATTERNS
        .iter()
        .map(|(name, pattern)| CompiledRule {
            name: name.to_string(),
            source: pattern.to_string(),
            matcher: Matcher::Builtin(regex::Regex::new(pattern).unwrap()),
        })
        .collect();
}

/// Built-ins run on `regex`; caller rules may use look-around and
/// backreferences, so they run on `fancy_regex`.
#[derive(Debug, Clone)]
enum Matcher {
    Builtin(regex::Regex),
    Custom(fancy_regex::Regex),
}

/// A classifier rule ready to scan with
#[derive(Debug, Clone)]
pub struct CompiledRule {
    name: String,
    source: String,
    matcher: Matcher,
}

impl CompiledRule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// All leftmost non-overlapping matches, or why the rule had to stop
    fn find_all(&self, text: &str, index: &CharIndex) -> Result<Vec<Detection>, SkippedRule> {
        let detection = |value: &str, start: usize, end: usize| {
            Detection::new(
                self.name.as_str(),
                value,
                index.char_offset(start),
                index.char_offset(end),
            )
        };

        match &self.matcher {
            Matcher::Builtin(regex) => Ok(regex
                .find_iter(text)
                .map(|m| detection(m.as_str(), m.start(), m.end()))
                .collect()),
            Matcher::Custom(regex) => regex
                .find_iter(text)
                .map(|m| {
                    m.map(|m| detection(m.as_str(), m.start(), m.end()))
                        .map_err(|e| self.skipped(e))
                })
                .collect(),
        }
    }

    fn skipped(&self, reason: impl ToString) -> SkippedRule {
        SkippedRule {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Compile one rule, or explain why it has to be skipped
pub fn compile_rule(name: &str, pattern: &str) -> Result<CompiledRule, SkippedRule> {
    if let Some(builtin) = BUILTIN_RULES
        .iter()
        .find(|rule| rule.name == name && rule.source == pattern)
    {
        return Ok(builtin.clone());
    }

    fancy_regex::Regex::new(pattern)
        .map(|regex| CompiledRule {
            name: name.to_string(),
            source: pattern.to_string(),
            matcher: Matcher::Custom(regex),
        })
        .map_err(|e| SkippedRule {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

/// Outcome of detecting and redacting one text
#[derive(Debug, Clone)]
pub struct Redaction {
    pub redacted_text: String,
    pub detections: Vec<Detection>,
    pub skipped: Vec<SkippedRule>,
}

/// PII detection and masking engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Redactor;

impl Redactor {
    pub fn new() -> Self {
        Self
    }

    /// Compile every rule of the registry, collecting the ones that fail
    pub fn compile(&self, registry: &PatternRegistry) -> (Vec<CompiledRule>, Vec<SkippedRule>) {
        let mut rules = Vec::with_capacity(registry.len());
        let mut skipped = Vec::new();

        for (name, pattern) in registry.iter() {
            match compile_rule(name, pattern) {
                Ok(rule) => rules.push(rule),
                Err(skip) => {
                    tracing::warn!(rule = %skip.name, reason = %skip.reason, "Skipping invalid pattern");
                    skipped.push(skip);
                }
            }
        }

        (rules, skipped)
    }

    /// Find all matches of every rule, grouped by rule in rule order.
    ///
    /// A rule that fails mid-scan (e.g. hits the backtracking limit)
    /// contributes nothing and is returned as skipped.
    pub fn detect(&self, text: &str, rules: &[CompiledRule]) -> (Vec<Detection>, Vec<SkippedRule>) {
        let index = CharIndex::new(text);
        let mut detections = Vec::new();
        let mut skipped = Vec::new();

        for rule in rules {
            match rule.find_all(text, &index) {
                Ok(found) => {
                    tracing::debug!(rule = %rule.name, matches = found.len(), "Applied rule");
                    detections.extend(found);
                }
                Err(skip) => {
                    tracing::warn!(rule = %skip.name, reason = %skip.reason, "Pattern failed during scan");
                    skipped.push(skip);
                }
            }
        }

        (detections, skipped)
    }

    /// Detect with the built-ins plus `custom`, then mask every detected position
    pub fn redact<I, K, V>(&self, text: &str, custom: I) -> Redaction
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let registry = effective_patterns(custom);
        self.redact_with(text, &registry)
    }

    /// Detect with an explicit registry, then mask every detected position
    pub fn redact_with(&self, text: &str, registry: &PatternRegistry) -> Redaction {
        let (rules, mut skipped) = self.compile(registry);
        let (detections, failed) = self.detect(text, &rules);
        skipped.extend(failed);

        Redaction {
            redacted_text: mask(text, &detections),
            detections,
            skipped,
        }
    }
}

/// Detect and redact `text` with the built-ins plus `custom`
pub fn detect_and_redact<I, K, V>(text: &str, custom: I) -> (String, Vec<Detection>)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let redaction = Redactor::new().redact(text, custom);
    (redaction.redacted_text, redaction.detections)
}

/// Overwrite every position covered by a detection with [`MASK_CHAR`]
pub fn mask(text: &str, detections: &[Detection]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    for detection in detections {
        let end = detection.end.min(len);
        let start = detection.start.min(end);
        chars[start..end].fill(MASK_CHAR);
    }

    chars.into_iter().collect()
}

/// Maps byte offsets of `text` to character offsets
struct CharIndex {
    boundaries: Vec<usize>,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        Self {
            boundaries: text.char_indices().map(|(byte, _)| byte).collect(),
        }
    }

    fn char_offset(&self, byte: usize) -> usize {
        self.boundaries.partition_point(|&b| b < byte)
    }
}
