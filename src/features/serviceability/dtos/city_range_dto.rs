use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::serviceability::models::{CityRange, SupportStatus};

/// Request DTO for creating a city range
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCityRangeDto {
    /// City/state/country composite key, e.g. "los-angeles-ca-us"
    #[validate(length(min = 1, max = 255, message = "Identifier must be 1-255 characters"))]
    pub identifier: String,

    /// Inclusive lower bound of the zip block
    #[validate(length(equal = 5, message = "zipRangeStart must be five characters"))]
    pub zip_range_start: String,

    /// Inclusive upper bound of the zip block
    #[validate(length(equal = 5, message = "zipRangeEnd must be five characters"))]
    pub zip_range_end: String,

    pub is_supported: SupportStatus,

    /// Representative city coordinates (optional)
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Request DTO for partially updating a city range; the identifier is immutable
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCityRangeDto {
    #[validate(length(equal = 5, message = "zipRangeStart must be five characters"))]
    pub zip_range_start: Option<String>,

    #[validate(length(equal = 5, message = "zipRangeEnd must be five characters"))]
    pub zip_range_end: Option<String>,

    pub is_supported: Option<SupportStatus>,

    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Response DTO for city range data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityRangeResponseDto {
    pub id: Uuid,
    pub identifier: String,
    pub zip_range_start: String,
    pub zip_range_end: String,
    pub is_supported: SupportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CityRange> for CityRangeResponseDto {
    fn from(range: CityRange) -> Self {
        Self {
            id: range.id,
            identifier: range.identifier,
            zip_range_start: range.zip_range_start,
            zip_range_end: range.zip_range_end,
            is_supported: range.is_supported,
            lat: range.lat,
            lng: range.lng,
            created_at: range.created_at,
            updated_at: range.updated_at,
        }
    }
}
