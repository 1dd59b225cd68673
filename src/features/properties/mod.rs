//! Operator service locations (properties).
//!
//! Full property management belongs to its own feature; this module carries
//! the read path the serviceability resolver depends on.

pub mod models;
pub mod services;

pub use services::PropertyService;
