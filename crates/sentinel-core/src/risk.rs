//! Risk heuristic

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Detection};

/// Classifier names that alone make a scan high risk
pub const HIGH_SENSITIVITY: &[&str] = &["AADHAAR", "PAN", "PASSPORT", "CREDIT_CARD", "CVV", "ATM_PIN"];

/// Classifier names that alone make a scan medium risk
pub const MEDIUM_SENSITIVITY: &[&str] = &["VOTER_ID", "GSTIN"];

/// More than this many detections is high risk regardless of type
const HIGH_COUNT_THRESHOLD: usize = 5;

/// At least this many detections is medium risk regardless of type
const MEDIUM_COUNT_THRESHOLD: usize = 3;

/// Coarse severity of one scan, ordered `None < Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(RiskLevel::None),
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(CoreError::UnknownRiskLevel(s.to_string())),
        }
    }
}

/// Derive the risk level of a scan from its detections.
///
/// Keys on the detection `kind` string only. A custom rule that reuses a
/// built-in name is classified as that built-in; a custom name never lands
/// in a sensitivity set.
pub fn calculate_risk(detections: &[Detection]) -> RiskLevel {
    if detections.is_empty() {
        return RiskLevel::None;
    }

    let total = detections.len();

    if any_of_kind(detections, HIGH_SENSITIVITY) || total > HIGH_COUNT_THRESHOLD {
        return RiskLevel::High;
    }
    if any_of_kind(detections, MEDIUM_SENSITIVITY) || total >= MEDIUM_COUNT_THRESHOLD {
        return RiskLevel::Medium;
    }
    RiskLevel::Low
}

fn any_of_kind(detections: &[Detection], kinds: &[&str]) -> bool {
    detections.iter().any(|d| kinds.contains(&d.kind.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detections(kinds: &[&str]) -> Vec<Detection> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| Detection::new(*kind, "x", i, i + 1))
            .collect()
    }

    #[test]
    fn test_no_detections() {
        assert_eq!(calculate_risk(&[]), RiskLevel::None);
    }

    #[test]
    fn test_high_sensitivity_type() {
        for kind in HIGH_SENSITIVITY {
            assert_eq!(calculate_risk(&detections(&[*kind])), RiskLevel::High, "{kind}");
        }
    }

    #[test]
    fn test_medium_sensitivity_type() {
        assert_eq!(calculate_risk(&detections(&["VOTER_ID"])), RiskLevel::Medium);
        assert_eq!(calculate_risk(&detections(&["EMAIL", "GSTIN"])), RiskLevel::Medium);
    }

    #[test]
    fn test_count_thresholds() {
        assert_eq!(calculate_risk(&detections(&["EMAIL", "DOB"])), RiskLevel::Low);
        assert_eq!(
            calculate_risk(&detections(&["EMAIL", "PHONE", "DOB"])),
            RiskLevel::Medium
        );
        assert_eq!(calculate_risk(&detections(&["EMAIL"; 5])), RiskLevel::Medium);
        assert_eq!(calculate_risk(&detections(&["EMAIL"; 6])), RiskLevel::High);
    }

    #[test]
    fn test_high_wins_over_medium() {
        assert_eq!(
            calculate_risk(&detections(&["VOTER_ID", "GSTIN", "PAN"])),
            RiskLevel::High
        );
    }

    #[test]
    fn test_custom_names_are_low() {
        assert_eq!(calculate_risk(&detections(&["EMPLOYEE_ID"])), RiskLevel::Low);
        assert_eq!(calculate_risk(&detections(&["pan"])), RiskLevel::Low);
    }

    #[test]
    fn test_ordering_and_parsing() {
        assert!(RiskLevel::None < RiskLevel::Low);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!("high".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!("None".parse::<RiskLevel>().unwrap(), RiskLevel::None);
        assert!("severe".parse::<RiskLevel>().is_err());
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"Medium\"");
    }
}
