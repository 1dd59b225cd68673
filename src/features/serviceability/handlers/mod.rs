pub mod city_range_handler;
pub mod serviceability_handler;
