//! Accept/reject decision for a single submit attempt
//!
//! Pure function of the field values; rendering the resulting annotations is
//! left to [`crate::guard`].

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::validators::{validate_keywords, validate_url};

/// Fields the guard knows how to validate, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardedField {
    Url,
    Keywords,
}

/// Field values read from a form at submit time.
///
/// `None` means the form has no such field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSnapshot<'a> {
    pub url: Option<&'a str>,
    pub keywords: Option<&'a str>,
}

/// One error to render next to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub field: GuardedField,
    pub error: InputError,
}

impl Annotation {
    pub fn message(&self) -> String {
        self.error.message()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the form submit
    Accept,
    /// Cancel the submit and show these annotations
    Reject(Vec<Annotation>),
}

impl SubmitDecision {
    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject(_))
    }

    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Self::Accept => &[],
            Self::Reject(annotations) => annotations,
        }
    }
}

/// Validate the snapshot: URL first, then keywords.
///
/// Absent and empty fields are skipped; only present, non-empty, invalid
/// values produce annotations.
pub fn evaluate(snapshot: &FormSnapshot<'_>) -> SubmitDecision {
    let mut annotations = Vec::new();

    if let Some(url) = non_empty(snapshot.url) {
        if let Err(error) = validate_url(url) {
            annotations.push(Annotation {
                field: GuardedField::Url,
                error,
            });
        }
    }

    if let Some(keywords) = non_empty(snapshot.keywords) {
        if let Err(error) = validate_keywords(keywords) {
            annotations.push(Annotation {
                field: GuardedField::Keywords,
                error,
            });
        }
    }

    if annotations.is_empty() {
        SubmitDecision::Accept
    } else {
        SubmitDecision::Reject(annotations)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
