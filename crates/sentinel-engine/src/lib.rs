use std::sync::Arc;

use anyhow::Result;
use sentinel_core::ScanResult;
use sentinel_security::{PatternRegistry, Redactor, effective_patterns};
use tokio::task::JoinSet;

/// Runs detection, redaction and risk scoring for one text at a time.
///
/// Holds no per-call state, so one scanner can be shared by any number of
/// concurrent callers.
#[derive(Clone)]
pub struct Scanner {
    redactor: Arc<Redactor>,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            redactor: Arc::new(Redactor::new()),
        }
    }

    /// Scan `text` with the built-in classifiers plus `custom`
    pub fn scan<I, K, V>(&self, text: &str, custom: I) -> ScanResult
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.scan_with(text, &effective_patterns(custom))
    }

    /// Scan `text` with an already merged registry
    pub fn scan_with(&self, text: &str, registry: &PatternRegistry) -> ScanResult {
        let redaction = self.redactor.redact_with(text, registry);
        let result = ScanResult::new(text.to_string(), redaction.redacted_text, redaction.detections)
            .with_skipped(redaction.skipped);

        tracing::info!(
            scan_id = %result.id,
            detections = result.detections.len(),
            skipped = result.skipped_rules.len(),
            risk = %result.risk_level,
            "Scan complete"
        );

        result
    }

    /// Scan many texts concurrently on the blocking pool.
    ///
    /// Results come back in the order of `texts`.
    pub async fn scan_batch(&self, texts: Vec<String>, registry: PatternRegistry) -> Result<Vec<ScanResult>> {
        let registry = Arc::new(registry);
        let mut tasks = JoinSet::new();

        for (position, text) in texts.into_iter().enumerate() {
            let scanner = self.clone();
            let registry = Arc::clone(&registry);
            tasks.spawn_blocking(move || (position, scanner.scan_with(&text, &registry)));
        }

        let mut results = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            results.push(joined?);
        }
        results.sort_by_key(|(position, _)| *position);

        Ok(results.into_iter().map(|(_, result)| result).collect())
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
