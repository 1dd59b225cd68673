use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::properties::models::Property;
use crate::features::serviceability::models::{
    CityRange, GeoPoint, ServiceabilityCheck, SupportStatus,
};

/// Read path into the property registry, keyed by zip.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn list_by_zip(&self, zip: &str) -> Result<Vec<Property>>;
}

/// Read path into the curated city range registry.
#[async_trait]
pub trait CityRangeRepository: Send + Sync {
    /// First range whose inclusive bounds contain the zip, if any
    async fn find_containing(&self, zip: &str) -> Result<Option<CityRange>>;
}

/// Read/write path into the persisted resolution cache.
///
/// The write is a single upsert keyed on zip so that two concurrent
/// resolutions of a never-before-seen zip cannot race a separate
/// exists-check into a duplicate insert.
#[async_trait]
pub trait ServiceabilityCheckRepository: Send + Sync {
    async fn get_by_zip(&self, zip: &str) -> Result<Option<ServiceabilityCheck>>;

    /// Insert or update the one live row for this zip.
    ///
    /// On update, `capacity` of `None` leaves the stored count untouched and
    /// existing coordinates are never overwritten; on insert, `capacity`
    /// defaults to zero.
    async fn upsert(
        &self,
        zip: &str,
        is_supported: SupportStatus,
        capacity: Option<i32>,
        coords: Option<GeoPoint>,
    ) -> Result<ServiceabilityCheck>;
}
