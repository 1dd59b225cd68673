use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::properties::models::Property;
use crate::features::serviceability::repository::PropertyRepository;

/// Read path into operator properties.
///
/// Property management (create/update, display fields, assignment) lives in
/// its own feature; serviceability resolution only needs the zip-indexed
/// lookup below.
pub struct PropertyService {
    pool: PgPool,
}

impl PropertyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PropertyService {
    async fn list_by_zip(&self, zip: &str) -> Result<Vec<Property>> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT id, name, address, city, state, zip, is_supported, created_at, updated_at
            FROM properties
            WHERE zip = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(zip)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch properties for zip {}: {:?}", zip, e);
            AppError::Database(e)
        })?;

        Ok(properties)
    }
}
