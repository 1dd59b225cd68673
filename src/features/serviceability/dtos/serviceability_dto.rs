use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::properties::models::Property;
use crate::features::serviceability::models::SupportStatus;
use crate::features::serviceability::services::Resolution;

/// Response DTO for a serviceability check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceabilityResponseDto {
    pub zip: String,
    pub is_supported: bool,
    /// Operator locations registered at this zip, when any exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertySummaryDto>>,
}

impl ServiceabilityResponseDto {
    pub fn from_resolution(zip: &str, resolution: Resolution) -> Self {
        Self {
            zip: zip.to_string(),
            is_supported: resolution.is_supported,
            properties: resolution
                .properties
                .map(|ps| ps.into_iter().map(Into::into).collect()),
        }
    }
}

/// Summary of one operator property at the checked zip
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummaryDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub zip: String,
    pub is_supported: SupportStatus,
}

impl From<Property> for PropertySummaryDto {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            name: property.name,
            address: property.address,
            zip: property.zip,
            is_supported: property.is_supported,
        }
    }
}
