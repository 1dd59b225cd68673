use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::serviceability::models::SupportStatus;

/// Operator-registered physical service location.
///
/// Properties are managed by their own feature; the serviceability resolver
/// only reads them, keyed by zip. A property's flag reflects direct operator
/// knowledge of the location and outranks every inferred signal.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub is_supported: SupportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
