mod city_range;
mod serviceability_check;
mod support_status;

pub use city_range::CityRange;
pub use serviceability_check::{GeoPoint, ServiceabilityCheck};
pub use support_status::SupportStatus;
