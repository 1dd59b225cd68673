mod city_range_service;
mod serviceability_check_service;
mod serviceability_service;

pub use city_range_service::CityRangeService;
pub use serviceability_check_service::ServiceabilityCheckService;
pub use serviceability_service::{Resolution, ServiceabilityService};
