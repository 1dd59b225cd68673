use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::serviceability::dtos::ServiceabilityResponseDto;
use crate::features::serviceability::services::ServiceabilityService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::ZIP_REGEX;

/// Check whether a zip code is currently serviceable
#[utoipa::path(
    get,
    path = "/api/serviceability/{zip}",
    params(
        ("zip" = String, Path, description = "Five-digit zip code")
    ),
    responses(
        (status = 200, description = "Serviceability decision", body = ApiResponse<ServiceabilityResponseDto>),
        (status = 400, description = "Malformed zip code")
    ),
    tag = "serviceability"
)]
pub async fn check_zip(
    State(service): State<Arc<ServiceabilityService>>,
    Path(zip): Path<String>,
) -> Result<Json<ApiResponse<ServiceabilityResponseDto>>> {
    let zip = zip.trim();
    if !ZIP_REGEX.is_match(zip) {
        return Err(AppError::Validation(
            "Zip code must be exactly five digits".to_string(),
        ));
    }

    let resolution = service.resolve(zip).await?;
    let dto = ServiceabilityResponseDto::from_resolution(zip, resolution);
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::features::serviceability::clients::geocoding_client::mock::MockGeocoder;
    use crate::features::serviceability::dtos::ServiceabilityResponseDto;
    use crate::features::serviceability::models::{CityRange, GeoPoint, SupportStatus};
    use crate::features::serviceability::repository::mock::{
        MockCityRangeRepository, MockPropertyRepository, MockServiceabilityCheckRepository,
    };
    use crate::features::serviceability::routes;
    use crate::features::serviceability::services::ServiceabilityService;
    use crate::shared::types::ApiResponse;

    fn test_server() -> TestServer {
        let ranges = vec![CityRange {
            id: Uuid::new_v4(),
            identifier: "los-angeles-ca-us".to_string(),
            zip_range_start: "90001".to_string(),
            zip_range_end: "90099".to_string(),
            is_supported: SupportStatus::Supported,
            lat: None,
            lng: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }];
        let service = ServiceabilityService::new(
            Arc::new(MockPropertyRepository::default()),
            Arc::new(MockCityRangeRepository::with_ranges(ranges)),
            Arc::new(MockServiceabilityCheckRepository::default()),
            Arc::new(MockGeocoder::returning(Ok(GeoPoint {
                lat: 34.0,
                lng: -118.4,
            }))),
        );
        TestServer::new(routes::routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_check_zip_returns_decision_envelope() {
        let server = test_server();

        let response = server.get("/api/serviceability/90050").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ServiceabilityResponseDto> = response.json();
        assert!(body.success);
        let data = body.data.unwrap();
        assert_eq!(data.zip, "90050");
        assert!(data.is_supported);
        assert!(data.properties.is_none());
    }

    #[tokio::test]
    async fn test_check_zip_rejects_malformed_input() {
        let server = test_server();

        for bad in ["9005", "900501", "9005a", "90210-1234"] {
            let response = server.get(&format!("/api/serviceability/{}", bad)).await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }
}
