use utoipa::{Modify, OpenApi};

use crate::features::serviceability::{
    dtos as serviceability_dtos, handlers as serviceability_handlers, models as serviceability_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Serviceability
        serviceability_handlers::serviceability_handler::check_zip,
        // City ranges (admin)
        serviceability_handlers::city_range_handler::create_city_range,
        serviceability_handlers::city_range_handler::list_city_ranges,
        serviceability_handlers::city_range_handler::get_city_range,
        serviceability_handlers::city_range_handler::update_city_range,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Serviceability
            serviceability_models::SupportStatus,
            serviceability_dtos::ServiceabilityResponseDto,
            serviceability_dtos::PropertySummaryDto,
            ApiResponse<serviceability_dtos::ServiceabilityResponseDto>,
            // City ranges
            serviceability_dtos::CreateCityRangeDto,
            serviceability_dtos::UpdateCityRangeDto,
            serviceability_dtos::CityRangeResponseDto,
            ApiResponse<serviceability_dtos::CityRangeResponseDto>,
            ApiResponse<Vec<serviceability_dtos::CityRangeResponseDto>>,
        )
    ),
    tags(
        (name = "serviceability", description = "Zip code serviceability resolution"),
        (name = "city-ranges", description = "Serviceable city zip-code ranges (admin)"),
    ),
    info(
        title = "Sudsy API",
        version = "0.1.0",
        description = "API documentation for Sudsy",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
