use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SupportStatus;

/// A point coordinate obtained from the geocoding provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Cached serviceability resolution for one zip code.
///
/// Created lazily by the resolver on the first full resolution of a zip and
/// updated in place on every re-resolution. A positive `confirmed_capacity`
/// records that washers actually operate in the zip and makes the entry
/// authoritative over a recomputed range lookup. The resolver never deletes
/// rows; `deleted_at` is an administrative soft delete.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceabilityCheck {
    pub id: Uuid,
    pub zip: String,
    pub is_supported: SupportStatus,
    pub confirmed_capacity: i32,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ServiceabilityCheck {
    /// Whether this entry is operationally confirmed and can short-circuit
    /// resolution: a definite flag plus at least one washer observed in the zip.
    pub fn is_confirmed(&self) -> bool {
        self.is_supported != SupportStatus::Unknown && self.confirmed_capacity > 0
    }
}
