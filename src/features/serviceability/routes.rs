use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::serviceability::handlers::{city_range_handler, serviceability_handler};
use crate::features::serviceability::services::{CityRangeService, ServiceabilityService};

/// Create routes for serviceability checks
pub fn routes(service: Arc<ServiceabilityService>) -> Router {
    Router::new()
        .route(
            "/api/serviceability/{zip}",
            get(serviceability_handler::check_zip),
        )
        .with_state(service)
}

/// Create admin routes for the city range registry
pub fn admin_routes(service: Arc<CityRangeService>) -> Router {
    Router::new()
        .route(
            "/api/serviceability/city-ranges",
            post(city_range_handler::create_city_range).get(city_range_handler::list_city_ranges),
        )
        .route(
            "/api/serviceability/city-ranges/{id}",
            get(city_range_handler::get_city_range).put(city_range_handler::update_city_range),
        )
        .with_state(service)
}
