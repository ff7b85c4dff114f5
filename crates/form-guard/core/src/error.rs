//! User-input errors raised by the validators

use thiserror::Error;

/// Why a field blocked the submission.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InputError {
    /// Not an absolute URL, or the scheme is neither `http` nor `https`
    #[error("Please enter a valid URL including http:// or https://")]
    MalformedUrl,

    /// Only separators and whitespace were entered
    #[error("Please enter at least one keyword")]
    EmptyKeywords,
}

impl InputError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
