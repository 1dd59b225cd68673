use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::serviceability::dtos::{CreateCityRangeDto, UpdateCityRangeDto};
use crate::features::serviceability::models::CityRange;
use crate::features::serviceability::repository::CityRangeRepository;
use crate::shared::types::PaginationQuery;
use crate::shared::validation::{RANGE_IDENTIFIER_REGEX, ZIP_REGEX};

/// Convert database error to more specific AppError with user-friendly messages
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return AppError::Conflict(
                "A city range with this identifier already exists.".to_string(),
            );
        }
    }

    AppError::Database(e)
}

fn ensure_well_formed_bounds(start: &str, end: &str) -> Result<()> {
    if !ZIP_REGEX.is_match(start) || !ZIP_REGEX.is_match(end) {
        return Err(AppError::Validation(
            "Range bounds must be five-digit zip codes".to_string(),
        ));
    }
    // Lexicographic order matches numeric order for zero-padded codes
    if start > end {
        return Err(AppError::Validation(
            "zipRangeStart must not exceed zipRangeEnd".to_string(),
        ));
    }
    Ok(())
}

/// Service for managing the curated city zip-range registry
pub struct CityRangeService {
    pool: PgPool,
}

impl CityRangeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new city range; the identifier must be unique
    pub async fn create(&self, dto: CreateCityRangeDto) -> Result<CityRange> {
        if !RANGE_IDENTIFIER_REGEX.is_match(&dto.identifier) {
            return Err(AppError::Validation(
                "Identifier must be lowercase alphanumeric segments joined by hyphens".to_string(),
            ));
        }
        ensure_well_formed_bounds(&dto.zip_range_start, &dto.zip_range_end)?;

        let range = sqlx::query_as::<_, CityRange>(
            r#"
            INSERT INTO city_ranges (identifier, zip_range_start, zip_range_end, is_supported, lat, lng)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, identifier, zip_range_start, zip_range_end, is_supported, lat, lng,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.identifier)
        .bind(&dto.zip_range_start)
        .bind(&dto.zip_range_end)
        .bind(dto.is_supported)
        .bind(dto.lat)
        .bind(dto.lng)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "City range created: identifier={}, bounds={}..{}",
            range.identifier,
            range.zip_range_start,
            range.zip_range_end
        );

        Ok(range)
    }

    /// List city ranges with pagination, ordered by identifier
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<(Vec<CityRange>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM city_ranges")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let ranges = sqlx::query_as::<_, CityRange>(
            r#"
            SELECT id, identifier, zip_range_start, zip_range_end, is_supported, lat, lng,
                   created_at, updated_at
            FROM city_ranges
            ORDER BY identifier ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok((ranges, total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CityRange> {
        let range = sqlx::query_as::<_, CityRange>(
            r#"
            SELECT id, identifier, zip_range_start, zip_range_end, is_supported, lat, lng,
                   created_at, updated_at
            FROM city_ranges
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("City range with id '{}' not found", id)))?;

        Ok(range)
    }

    /// Partially update a city range; the identifier is immutable
    pub async fn update(&self, id: Uuid, dto: UpdateCityRangeDto) -> Result<CityRange> {
        let existing = self.get_by_id(id).await?;

        let zip_range_start = dto.zip_range_start.unwrap_or(existing.zip_range_start);
        let zip_range_end = dto.zip_range_end.unwrap_or(existing.zip_range_end);
        ensure_well_formed_bounds(&zip_range_start, &zip_range_end)?;

        let is_supported = dto.is_supported.unwrap_or(existing.is_supported);
        let lat = dto.lat.or(existing.lat);
        let lng = dto.lng.or(existing.lng);

        let range = sqlx::query_as::<_, CityRange>(
            r#"
            UPDATE city_ranges
            SET zip_range_start = $2, zip_range_end = $3, is_supported = $4, lat = $5, lng = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, identifier, zip_range_start, zip_range_end, is_supported, lat, lng,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&zip_range_start)
        .bind(&zip_range_end)
        .bind(is_supported)
        .bind(lat)
        .bind(lng)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(range)
    }
}

#[async_trait]
impl CityRangeRepository for CityRangeService {
    async fn find_containing(&self, zip: &str) -> Result<Option<CityRange>> {
        let range = sqlx::query_as::<_, CityRange>(
            r#"
            SELECT id, identifier, zip_range_start, zip_range_end, is_supported, lat, lng,
                   created_at, updated_at
            FROM city_ranges
            WHERE zip_range_start <= $1 AND zip_range_end >= $1
            ORDER BY zip_range_start ASC
            LIMIT 1
            "#,
        )
        .bind(zip)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_must_be_zips() {
        assert!(ensure_well_formed_bounds("90001", "90099").is_ok());
        assert!(ensure_well_formed_bounds("9001", "90099").is_err());
        assert!(ensure_well_formed_bounds("90001", "90099-1").is_err());
    }

    #[test]
    fn test_bounds_must_be_ordered() {
        assert!(ensure_well_formed_bounds("90099", "90001").is_err());
        assert!(ensure_well_formed_bounds("90001", "90001").is_ok());
    }
}
