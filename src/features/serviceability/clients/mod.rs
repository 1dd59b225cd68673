pub mod geocoding_client;

pub use geocoding_client::{Geocoder, GeocodingClient, GeocodingError};
