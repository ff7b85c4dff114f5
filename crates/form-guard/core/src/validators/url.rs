//! URL field validation

use url::Url;

use crate::error::InputError;

/// Schemes a URL field may use
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Returns true when `value` parses as an absolute URL with an `http` or
/// `https` scheme.
///
/// Parsing follows the WHATWG URL standard, the same algorithm browsers use,
/// so leading/trailing spaces are tolerated and the scheme is compared after
/// lowercasing.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

pub fn validate_url(value: &str) -> Result<(), InputError> {
    if is_valid_url(value) {
        Ok(())
    } else {
        Err(InputError::MalformedUrl)
    }
}
