//! Form Guard Core
//!
//! Submit-time validation for HTML forms: checks a URL field and a keywords
//! field, rejects the submission when either holds an invalid value, and
//! renders one inline error annotation per offending field.
//!
//! The DOM is reached only through the [`Document`], [`GuardedForm`] and
//! [`FieldHandle`] traits, so the same guard drives the browser adapter and
//! the in-memory [`page`] used by tests.

pub mod annotation;
pub mod config;
pub mod decision;
pub mod error;
pub mod guard;
pub mod page;
pub mod validators;

pub use annotation::{attach_error, clear_error, FieldHandle};
pub use config::{AnnotationConfig, FieldSelector, FieldsConfig, GuardConfig};
pub use decision::{evaluate, Annotation, FormSnapshot, GuardedField, SubmitDecision};
pub use error::InputError;
pub use guard::{Document, FormGuard, GuardedForm, SubmitHandler};
pub use validators::*;
