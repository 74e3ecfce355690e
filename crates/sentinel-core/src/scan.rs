//! Scan result domain model

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Detection, RiskLevel, calculate_risk};

/// Output of one engine invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub id: String,
    pub original_text: String,
    pub redacted_text: String,
    #[serde(alias = "detected_pii")]
    pub detections: Vec<Detection>,
    pub risk_level: RiskLevel,
    /// Rules that could not be compiled and contributed nothing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_rules: Vec<SkippedRule>,
    #[serde(with = "time::serde::timestamp")]
    pub scanned_at: OffsetDateTime,
}

impl ScanResult {
    /// Build a result, deriving the risk level from `detections`
    pub fn new(original_text: String, redacted_text: String, detections: Vec<Detection>) -> Self {
        let risk_level = calculate_risk(&detections);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            original_text,
            redacted_text,
            detections,
            risk_level,
            skipped_rules: Vec::new(),
            scanned_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_skipped(mut self, skipped_rules: Vec<SkippedRule>) -> Self {
        self.skipped_rules = skipped_rules;
        self
    }

    pub fn has_findings(&self) -> bool {
        !self.detections.is_empty()
    }

    /// Detection counts per classifier, in first-seen order
    pub fn counts_by_kind(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for detection in &self.detections {
            match counts.iter_mut().find(|(kind, _)| *kind == detection.kind) {
                Some((_, count)) => *count += 1,
                None => counts.push((detection.kind.as_str(), 1)),
            }
        }
        counts
    }

    /// History listing view; drops the original text
    pub fn history_view(&self) -> HistoryEntry {
        HistoryEntry {
            id: self.id.clone(),
            redacted_text: self.redacted_text.clone(),
            detections: self.detections.clone(),
            risk_level: self.risk_level,
            scanned_at: self.scanned_at,
        }
    }
}

/// A scan as exposed by a history listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub redacted_text: String,
    #[serde(alias = "detected_pii")]
    pub detections: Vec<Detection>,
    pub risk_level: RiskLevel,
    #[serde(with = "time::serde::timestamp")]
    pub scanned_at: OffsetDateTime,
}

/// A classifier rule left out of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRule {
    pub name: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_is_derived() {
        let result = ScanResult::new(
            "PAN ABCDE1234F".to_string(),
            "PAN **********".to_string(),
            vec![Detection::new("PAN", "ABCDE1234F", 4, 14)],
        );

        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.has_findings());
        assert!(result.skipped_rules.is_empty());
    }

    #[test]
    fn test_counts_by_kind() {
        let result = ScanResult::new(
            String::new(),
            String::new(),
            vec![
                Detection::new("EMAIL", "a@b.io", 0, 6),
                Detection::new("PHONE", "9876543210", 7, 17),
                Detection::new("EMAIL", "c@d.io", 18, 24),
            ],
        );

        assert_eq!(result.counts_by_kind(), vec![("EMAIL", 2), ("PHONE", 1)]);
    }

    #[test]
    fn test_history_view_omits_original() {
        let result = ScanResult::new(
            "mail a@b.io".to_string(),
            "mail ******".to_string(),
            vec![Detection::new("EMAIL", "a@b.io", 5, 11)],
        );

        let entry = result.history_view();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(entry.id, result.id);
        assert!(json.get("original_text").is_none());
        assert_eq!(json["risk_level"], "Low");
        assert_eq!(json["detections"][0]["type"], "EMAIL");
    }

    #[test]
    fn test_skipped_rules_omitted_when_empty() {
        let result = ScanResult::new(String::new(), String::new(), Vec::new());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("skipped_rules").is_none());

        let result = result.with_skipped(vec![SkippedRule {
            name: "BAD".to_string(),
            reason: "unclosed group".to_string(),
        }]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["skipped_rules"][0]["name"], "BAD");
    }
}
