use std::sync::Arc;

use crate::core::error::Result;
use crate::features::properties::models::Property;
use crate::features::serviceability::clients::Geocoder;
use crate::features::serviceability::models::SupportStatus;
use crate::features::serviceability::repository::{
    CityRangeRepository, PropertyRepository, ServiceabilityCheckRepository,
};

/// Closed-world default for zips no curated range covers: areas we have not
/// registered are out of service, not unknown. This is business policy, not
/// a technical necessity, and may be revisited independently of the
/// resolution algorithm.
const UNLISTED_ZIP_STATUS: SupportStatus = SupportStatus::Unsupported;

/// Outcome of a serviceability resolution.
///
/// `properties` carries the operator locations matched at the zip, when any
/// exist, so callers can disambiguate which location an answer refers to.
#[derive(Debug)]
pub struct Resolution {
    pub is_supported: bool,
    pub properties: Option<Vec<Property>>,
}

/// Verdict from the property registry, the highest-trust signal.
///
/// A single property with a definite flag is authoritative. Several
/// properties aggregate conjunctively: one unsupported location vetoes the
/// zip, so a customer is never told an area is served when the nearest
/// known location cannot serve them. A lone property whose flag is still
/// unknown decides nothing and resolution falls through.
fn property_override(properties: &[Property]) -> Option<bool> {
    match properties {
        [] => None,
        [only] => only.is_supported.as_bool(),
        many => Some(
            many.iter()
                .all(|p| p.is_supported == SupportStatus::Supported),
        ),
    }
}

/// Orchestrates zip-code serviceability resolution across the property
/// registry, the resolution cache, the curated city ranges and the external
/// geocoder, in descending order of trust.
///
/// The resolver is stateless; all state lives behind the repositories. It
/// never surfaces a geocoding failure and never returns an indefinite
/// answer; only a storage failure propagates to the caller.
pub struct ServiceabilityService {
    properties: Arc<dyn PropertyRepository>,
    city_ranges: Arc<dyn CityRangeRepository>,
    checks: Arc<dyn ServiceabilityCheckRepository>,
    geocoder: Arc<dyn Geocoder>,
}

impl ServiceabilityService {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        city_ranges: Arc<dyn CityRangeRepository>,
        checks: Arc<dyn ServiceabilityCheckRepository>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            properties,
            city_ranges,
            checks,
            geocoder,
        }
    }

    /// Resolve whether the operator currently serves `zip`.
    ///
    /// The zip must already be normalized (digits-only, fixed length) by
    /// the caller; only business precedence is applied here.
    pub async fn resolve(&self, zip: &str) -> Result<Resolution> {
        // 1. Property override
        let properties = self.properties.list_by_zip(zip).await?;
        if let Some(is_supported) = property_override(&properties) {
            return Ok(Resolution {
                is_supported,
                properties: Some(properties),
            });
        }
        let matched_properties = (!properties.is_empty()).then_some(properties);

        // 2. Cache hit with operational confirmation
        let cached = self.checks.get_by_zip(zip).await?;
        if let Some(check) = &cached {
            if check.is_confirmed() {
                return Ok(Resolution {
                    is_supported: check.is_supported == SupportStatus::Supported,
                    properties: matched_properties,
                });
            }
        }

        // 3. City range computation; an entry that exists but is not
        // confirmed is stale and gets updated in place below
        let computed = match self.city_ranges.find_containing(zip).await? {
            Some(range) => range.is_supported,
            None => UNLISTED_ZIP_STATUS,
        };

        // 4-5. Cache write-through; geocoding only enriches brand-new rows
        // and its failure skips persistence without degrading the answer
        match cached {
            Some(_) => {
                self.checks.upsert(zip, computed, None, None).await?;
            }
            None => match self.geocoder.geocode_zip(zip).await {
                Ok(point) => {
                    self.checks.upsert(zip, computed, None, Some(point)).await?;
                }
                Err(e) => {
                    tracing::warn!("Geocoding failed for zip {}, skipping cache write: {}", zip, e);
                }
            },
        }

        Ok(Resolution {
            is_supported: computed.as_bool().unwrap_or(false),
            properties: matched_properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fake::{Fake, Faker};
    use uuid::Uuid;

    use crate::features::serviceability::clients::geocoding_client::mock::MockGeocoder;
    use crate::features::serviceability::clients::GeocodingError;
    use crate::features::serviceability::models::{CityRange, GeoPoint, ServiceabilityCheck};
    use crate::features::serviceability::repository::mock::{
        MockCityRangeRepository, MockPropertyRepository, MockServiceabilityCheckRepository,
    };
    use tokio_test::assert_ok;

    const POINT: GeoPoint = GeoPoint {
        lat: 34.1030032,
        lng: -118.4104684,
    };

    fn property(zip: &str, status: SupportStatus) -> Property {
        Property {
            id: Uuid::new_v4(),
            name: Faker.fake(),
            address: Faker.fake(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            zip: zip.to_string(),
            is_supported: status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn range(start: &str, end: &str, status: SupportStatus) -> CityRange {
        CityRange {
            id: Uuid::new_v4(),
            identifier: "los-angeles-ca-us".to_string(),
            zip_range_start: start.to_string(),
            zip_range_end: end.to_string(),
            is_supported: status,
            lat: None,
            lng: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn check(zip: &str, status: SupportStatus, capacity: i32) -> ServiceabilityCheck {
        ServiceabilityCheck {
            id: Uuid::new_v4(),
            zip: zip.to_string(),
            is_supported: status,
            confirmed_capacity: capacity,
            lat: None,
            lng: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    struct Fixture {
        properties: Arc<MockPropertyRepository>,
        city_ranges: Arc<MockCityRangeRepository>,
        checks: Arc<MockServiceabilityCheckRepository>,
        geocoder: Arc<MockGeocoder>,
    }

    impl Fixture {
        fn new(
            properties: Vec<Property>,
            ranges: Vec<CityRange>,
            checks: Vec<ServiceabilityCheck>,
            geocode: std::result::Result<GeoPoint, GeocodingError>,
        ) -> Self {
            Self {
                properties: Arc::new(MockPropertyRepository::with_properties(properties)),
                city_ranges: Arc::new(MockCityRangeRepository::with_ranges(ranges)),
                checks: Arc::new(MockServiceabilityCheckRepository::with_rows(checks)),
                geocoder: Arc::new(MockGeocoder::returning(geocode)),
            }
        }

        fn service(&self) -> ServiceabilityService {
            ServiceabilityService::new(
                self.properties.clone(),
                self.city_ranges.clone(),
                self.checks.clone(),
                self.geocoder.clone(),
            )
        }
    }

    #[test]
    fn test_property_override_rules() {
        assert_eq!(property_override(&[]), None);
        assert_eq!(
            property_override(&[property("90210", SupportStatus::Supported)]),
            Some(true)
        );
        assert_eq!(
            property_override(&[property("90210", SupportStatus::Unsupported)]),
            Some(false)
        );
        // a lone undecided property decides nothing
        assert_eq!(
            property_override(&[property("90210", SupportStatus::Unknown)]),
            None
        );
        // one unsupported location vetoes the zip
        assert_eq!(
            property_override(&[
                property("90210", SupportStatus::Supported),
                property("90210", SupportStatus::Unsupported),
            ]),
            Some(false)
        );
        assert_eq!(
            property_override(&[
                property("90210", SupportStatus::Supported),
                property("90210", SupportStatus::Supported),
            ]),
            Some(true)
        );
    }

    #[tokio::test]
    async fn test_supported_range_creates_cache_row_with_coords() {
        let fx = Fixture::new(
            vec![],
            vec![range("90001", "90099", SupportStatus::Supported)],
            vec![],
            Ok(POINT),
        );

        let resolution = fx.service().resolve("90050").await.unwrap();

        assert!(resolution.is_supported);
        assert!(resolution.properties.is_none());
        let row = fx.checks.get_by_zip("90050").await.unwrap().unwrap();
        assert_eq!(row.is_supported, SupportStatus::Supported);
        assert_eq!(row.confirmed_capacity, 0);
        assert_eq!(row.lat, Some(POINT.lat));
        assert_eq!(row.lng, Some(POINT.lng));
        assert_eq!(fx.geocoder.calls(), 1);
    }

    #[tokio::test]
    async fn test_unlisted_zip_defaults_to_unsupported() {
        let fx = Fixture::new(vec![], vec![], vec![], Ok(POINT));

        let resolution = fx.service().resolve("10001").await.unwrap();

        assert!(!resolution.is_supported);
        let row = fx.checks.get_by_zip("10001").await.unwrap().unwrap();
        assert_eq!(row.is_supported, SupportStatus::Unsupported);
    }

    #[tokio::test]
    async fn test_single_property_overrides_every_other_signal() {
        // cache and range both say unsupported; the property wins
        let fx = Fixture::new(
            vec![property("90210", SupportStatus::Supported)],
            vec![range("90200", "90299", SupportStatus::Unsupported)],
            vec![check("90210", SupportStatus::Unsupported, 4)],
            Ok(POINT),
        );

        let resolution = fx.service().resolve("90210").await.unwrap();

        assert!(resolution.is_supported);
        assert_eq!(resolution.properties.unwrap().len(), 1);
        // the override short-circuits: no writes, no geocoding
        assert_eq!(fx.checks.upsert_calls(), 0);
        assert_eq!(fx.geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_one_unsupported_property_vetoes_the_zip() {
        let fx = Fixture::new(
            vec![
                property("90210", SupportStatus::Supported),
                property("90210", SupportStatus::Unsupported),
            ],
            vec![range("90200", "90299", SupportStatus::Supported)],
            vec![],
            Ok(POINT),
        );

        let resolution = fx.service().resolve("90210").await.unwrap();

        assert!(!resolution.is_supported);
        assert_eq!(resolution.properties.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_cache_entry_short_circuits_and_issues_no_writes() {
        let fx = Fixture::new(
            vec![],
            // the range disagrees; the confirmed entry is stronger evidence
            vec![range("90200", "90299", SupportStatus::Unsupported)],
            vec![check("90210", SupportStatus::Supported, 3)],
            Ok(POINT),
        );
        let service = fx.service();

        let first = service.resolve("90210").await.unwrap();
        let second = service.resolve("90210").await.unwrap();

        assert!(first.is_supported);
        assert!(second.is_supported);
        assert_eq!(fx.checks.upsert_calls(), 0);
        assert_eq!(fx.geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_stale_entry_is_updated_in_place_without_geocoding() {
        let stale = check("90210", SupportStatus::Unknown, 0);
        let fx = Fixture::new(
            vec![],
            vec![range("90200", "90299", SupportStatus::Unsupported)],
            vec![stale],
            Ok(POINT),
        );

        let resolution = fx.service().resolve("90210").await.unwrap();

        assert!(!resolution.is_supported);
        assert_eq!(fx.checks.row_count(), 1);
        let row = fx.checks.get_by_zip("90210").await.unwrap().unwrap();
        assert_eq!(row.is_supported, SupportStatus::Unsupported);
        assert_eq!(row.confirmed_capacity, 0);
        assert_eq!(row.lat, None);
        // the stale path never reaches the geocoder
        assert_eq!(fx.geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn test_geocoding_failure_skips_persistence_but_still_answers() {
        for error in [
            GeocodingError::RateLimited,
            GeocodingError::Denied,
            GeocodingError::NoResults,
            GeocodingError::Unknown("boom".to_string()),
        ] {
            let fx = Fixture::new(
                vec![],
                vec![range("90001", "90099", SupportStatus::Supported)],
                vec![],
                Err(error),
            );

            let resolution = fx.service().resolve("90050").await.unwrap();

            assert!(resolution.is_supported);
            assert_eq!(fx.checks.row_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_written_cache_row_round_trips_the_answer() {
        let fx = Fixture::new(
            vec![],
            vec![range("90001", "90099", SupportStatus::Supported)],
            vec![],
            Ok(POINT),
        );
        let service = fx.service();

        let resolution = tokio_test::assert_ok!(service.resolve("90050").await);

        let row = fx.checks.get_by_zip("90050").await.unwrap().unwrap();
        assert_eq!(row.is_supported.as_bool(), Some(resolution.is_supported));
    }

    #[tokio::test]
    async fn test_lone_undecided_property_falls_through_but_is_reported() {
        let fx = Fixture::new(
            vec![property("90050", SupportStatus::Unknown)],
            vec![range("90001", "90099", SupportStatus::Supported)],
            vec![],
            Ok(POINT),
        );

        let resolution = fx.service().resolve("90050").await.unwrap();

        assert!(resolution.is_supported);
        assert_eq!(resolution.properties.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_undecided_range_answers_false_and_stays_stale() {
        let fx = Fixture::new(
            vec![],
            vec![range("90001", "90099", SupportStatus::Unknown)],
            vec![],
            Ok(POINT),
        );

        let resolution = fx.service().resolve("90050").await.unwrap();

        // the caller still gets a definite answer
        assert!(!resolution.is_supported);
        // the row keeps the unknown flag, so the next call recomputes
        let row = fx.checks.get_by_zip("90050").await.unwrap().unwrap();
        assert_eq!(row.is_supported, SupportStatus::Unknown);
        assert!(!row.is_confirmed());
    }
}
