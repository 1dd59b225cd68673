//! Zip-code serviceability resolution.
//!
//! Decides whether the operator currently serves a zip code using three
//! zip-keyed signals of differing authority, while keeping a write-through
//! cache current and minimizing calls to the external geocoder.
//!
//! ## Resolution precedence
//!
//! 1. Operator properties at the zip (direct knowledge, authoritative)
//! 2. Cached resolution with confirmed capacity (service actually delivered)
//! 3. Curated city zip ranges (inferred area coverage)
//! 4. Closed-world default: unlisted zips are out of service
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/serviceability/{zip}` | Resolve serviceability for a zip |
//! | POST | `/api/serviceability/city-ranges` | Create a city range |
//! | GET | `/api/serviceability/city-ranges` | List city ranges |
//! | GET | `/api/serviceability/city-ranges/{id}` | Get a city range |
//! | PUT | `/api/serviceability/city-ranges/{id}` | Update a city range |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use services::ServiceabilityService;
