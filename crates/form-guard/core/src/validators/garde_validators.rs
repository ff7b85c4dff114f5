//! garde custom validators
//!
//! The URL and keyword checks in the shape garde expects, so server-side
//! forms can reuse them:
//!
//! ```ignore
//! use garde::Validate;
//!
//! #[derive(Validate)]
//! struct PlannerForm {
//!     #[garde(custom(http_url))]
//!     website_url: String,
//!     #[garde(custom(has_keywords))]
//!     keywords: String,
//! }
//! ```

use super::keywords::validate_keywords;
use super::url::validate_url;

/// Validator: absolute `http`/`https` URL
pub fn http_url(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    validate_url(value).map_err(|e| garde::Error::new(e.message()))
}

/// Validator: at least one comma or newline separated keyword
pub fn has_keywords(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    validate_keywords(value)
        .map(|_| ())
        .map_err(|e| garde::Error::new(e.message()))
}
