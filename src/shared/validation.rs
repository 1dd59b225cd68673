use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating normalized zip codes
    /// Must be exactly five digits
    /// - Valid: "90210", "00501"
    /// - Invalid: "9021", "902101", "9021a", "90210-1234"
    pub static ref ZIP_REGEX: Regex = Regex::new(r"^[0-9]{5}$").unwrap();

    /// Regex for validating city range identifiers (city/state/country composite)
    /// Must be lowercase alphanumeric segments joined by hyphens
    /// - Valid: "los-angeles-ca-us", "miami-fl-us"
    /// - Invalid: "-la", "la-", "la--ca", "LA", "la_ca"
    pub static ref RANGE_IDENTIFIER_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}
