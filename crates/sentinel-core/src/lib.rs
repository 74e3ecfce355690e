//! Core domain models for sentinel
//!
//! This crate contains:
//! - Detection and scan result models
//! - Risk level and the risk heuristic
//! - Shared error type

pub mod detection;
pub mod error;
pub mod risk;
pub mod scan;

pub use detection::{Detection, detections_from_json, detections_to_json};
pub use error::{CoreError, Result};
pub use risk::{HIGH_SENSITIVITY, MEDIUM_SENSITIVITY, RiskLevel, calculate_risk};
pub use scan::{HistoryEntry, ScanResult, SkippedRule};
