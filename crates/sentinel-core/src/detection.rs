//! Detection model

use serde::{Deserialize, Serialize};

use crate::Result;

/// One matched span of a classifier.
///
/// Offsets are character indices into the scanned text, `start` inclusive
/// and `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl Detection {
    pub fn new(kind: impl Into<String>, value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            start,
            end,
        }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overlaps(&self, other: &Detection) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Encode a detection list the way scan history stores it
pub fn detections_to_json(detections: &[Detection]) -> Result<String> {
    Ok(serde_json::to_string(detections)?)
}

/// Decode a stored detection list
pub fn detections_from_json(json: &str) -> Result<Vec<Detection>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_type_field() {
        let detection = Detection::new("PAN", "ABCDE1234F", 4, 14);
        let json = serde_json::to_value(&detection).unwrap();

        assert_eq!(json["type"], "PAN");
        assert_eq!(json["value"], "ABCDE1234F");
        assert_eq!(json["start"], 4);
        assert_eq!(json["end"], 14);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_stored_history_format() {
        // Shape written by the original scan history table
        let stored = r#"[{"type": "EMAIL", "value": "a@b.io", "start": 0, "end": 6}]"#;
        let detections = detections_from_json(stored).unwrap();

        assert_eq!(detections, vec![Detection::new("EMAIL", "a@b.io", 0, 6)]);
        assert_eq!(
            detections_from_json(&detections_to_json(&detections).unwrap()).unwrap(),
            detections
        );
    }

    #[test]
    fn test_overlaps() {
        let card = Detection::new("CREDIT_CARD", "4111 1111 1111 1111", 0, 19);
        let pin = Detection::new("ATM_PIN", "1111", 15, 19);
        let later = Detection::new("CVV", "123", 20, 23);

        assert!(card.overlaps(&pin));
        assert!(pin.overlaps(&card));
        assert!(!card.overlaps(&later));
        assert_eq!(pin.len(), 4);
    }

    #[test]
    fn test_rejects_malformed_history() {
        assert!(detections_from_json("{not json").is_err());
    }
}
