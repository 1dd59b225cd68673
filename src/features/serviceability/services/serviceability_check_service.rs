use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::serviceability::models::{GeoPoint, ServiceabilityCheck, SupportStatus};
use crate::features::serviceability::repository::ServiceabilityCheckRepository;

/// Persistence for the zip-keyed resolution cache.
///
/// The partial unique index on (zip) WHERE deleted_at IS NULL enforces the
/// one-live-row-per-zip invariant; the upsert targets that index so a
/// concurrent first resolution of the same zip degrades to an update
/// instead of a duplicate-key failure.
pub struct ServiceabilityCheckService {
    pool: PgPool,
}

impl ServiceabilityCheckService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceabilityCheckRepository for ServiceabilityCheckService {
    async fn get_by_zip(&self, zip: &str) -> Result<Option<ServiceabilityCheck>> {
        let check = sqlx::query_as::<_, ServiceabilityCheck>(
            r#"
            SELECT id, zip, is_supported, confirmed_capacity, lat, lng,
                   created_at, updated_at, deleted_at
            FROM serviceability_checks
            WHERE zip = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(zip)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(check)
    }

    async fn upsert(
        &self,
        zip: &str,
        is_supported: SupportStatus,
        capacity: Option<i32>,
        coords: Option<GeoPoint>,
    ) -> Result<ServiceabilityCheck> {
        let check = sqlx::query_as::<_, ServiceabilityCheck>(
            r#"
            INSERT INTO serviceability_checks (zip, is_supported, confirmed_capacity, lat, lng)
            VALUES ($1, $2, COALESCE($3, 0), $4, $5)
            ON CONFLICT (zip) WHERE deleted_at IS NULL
            DO UPDATE SET
                is_supported = EXCLUDED.is_supported,
                confirmed_capacity = COALESCE($3, serviceability_checks.confirmed_capacity),
                lat = COALESCE(serviceability_checks.lat, EXCLUDED.lat),
                lng = COALESCE(serviceability_checks.lng, EXCLUDED.lng),
                updated_at = NOW()
            RETURNING id, zip, is_supported, confirmed_capacity, lat, lng,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(zip)
        .bind(is_supported)
        .bind(capacity)
        .bind(coords.map(|c| c.lat))
        .bind(coords.map(|c| c.lng))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(check)
    }
}
