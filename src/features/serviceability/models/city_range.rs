use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::SupportStatus;

/// Manually curated block of contiguous zip codes for one serviceable city.
///
/// Bounds are inclusive and compared lexicographically, which is equivalent
/// to numeric order for equal-length zero-padded codes. Ranges are assumed
/// non-overlapping in well-formed data; lookups take the first match.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CityRange {
    pub id: Uuid,
    /// Human-readable city/state/country composite key, e.g. "los-angeles-ca-us"
    pub identifier: String,
    pub zip_range_start: String,
    pub zip_range_end: String,
    pub is_supported: SupportStatus,
    /// Representative city coordinates, administrative metadata only
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CityRange {
    /// Inclusive containment check on the zip bounds; the SQL lookup applies
    /// the same comparison server-side
    #[allow(dead_code)]
    pub fn contains(&self, zip: &str) -> bool {
        self.zip_range_start.as_str() <= zip && zip <= self.zip_range_end.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> CityRange {
        CityRange {
            id: Uuid::new_v4(),
            identifier: "los-angeles-ca-us".to_string(),
            zip_range_start: start.to_string(),
            zip_range_end: end.to_string(),
            is_supported: SupportStatus::Supported,
            lat: None,
            lng: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_contains_inclusive_bounds() {
        let r = range("90001", "90099");
        assert!(r.contains("90001"));
        assert!(r.contains("90050"));
        assert!(r.contains("90099"));
    }

    #[test]
    fn test_contains_rejects_outside() {
        let r = range("90001", "90099");
        assert!(!r.contains("90000"));
        assert!(!r.contains("90100"));
        assert!(!r.contains("10001"));
    }

    #[test]
    fn test_contains_zero_padded_codes() {
        let r = range("00501", "00599");
        assert!(r.contains("00544"));
        assert!(!r.contains("01000"));
    }
}
