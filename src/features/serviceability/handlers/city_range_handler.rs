use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::serviceability::dtos::{
    CityRangeResponseDto, CreateCityRangeDto, UpdateCityRangeDto,
};
use crate::features::serviceability::services::CityRangeService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Create a new serviceable city range
#[utoipa::path(
    post,
    path = "/api/serviceability/city-ranges",
    request_body = CreateCityRangeDto,
    responses(
        (status = 200, description = "City range created", body = ApiResponse<CityRangeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Identifier already exists")
    ),
    tag = "city-ranges"
)]
pub async fn create_city_range(
    State(service): State<Arc<CityRangeService>>,
    AppJson(dto): AppJson<CreateCityRangeDto>,
) -> Result<Json<ApiResponse<CityRangeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let range = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(range.into()), None, None)))
}

/// List city ranges with pagination
#[utoipa::path(
    get,
    path = "/api/serviceability/city-ranges",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of city ranges", body = ApiResponse<Vec<CityRangeResponseDto>>)
    ),
    tag = "city-ranges"
)]
pub async fn list_city_ranges(
    State(service): State<Arc<CityRangeService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<CityRangeResponseDto>>>> {
    let (ranges, total) = service.list(&pagination).await?;
    let dtos: Vec<CityRangeResponseDto> = ranges.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get a city range by ID
#[utoipa::path(
    get,
    path = "/api/serviceability/city-ranges/{id}",
    params(
        ("id" = Uuid, Path, description = "City range ID")
    ),
    responses(
        (status = 200, description = "City range details", body = ApiResponse<CityRangeResponseDto>),
        (status = 404, description = "City range not found")
    ),
    tag = "city-ranges"
)]
pub async fn get_city_range(
    State(service): State<Arc<CityRangeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CityRangeResponseDto>>> {
    let range = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(range.into()), None, None)))
}

/// Partially update a city range
#[utoipa::path(
    put,
    path = "/api/serviceability/city-ranges/{id}",
    params(
        ("id" = Uuid, Path, description = "City range ID")
    ),
    request_body = UpdateCityRangeDto,
    responses(
        (status = 200, description = "City range updated", body = ApiResponse<CityRangeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "City range not found")
    ),
    tag = "city-ranges"
)]
pub async fn update_city_range(
    State(service): State<Arc<CityRangeService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCityRangeDto>,
) -> Result<Json<ApiResponse<CityRangeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let range = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(range.into()), None, None)))
}
