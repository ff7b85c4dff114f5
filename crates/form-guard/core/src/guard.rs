//! Form Guard: one submit handler per form, installed once at page-ready

use std::rc::Rc;

use crate::annotation::{attach_error, clear_error, FieldHandle};
use crate::config::{FieldSelector, GuardConfig};
use crate::decision::{evaluate, FormSnapshot, GuardedField, SubmitDecision};

/// Called on every submit attempt; a `Reject` cancels the native submit
pub type SubmitHandler = Box<dyn FnMut() -> SubmitDecision>;

/// The page (or any root) the guard is installed on
pub trait Document {
    type Form: GuardedForm;

    /// Forms present right now, in document order
    fn forms(&self) -> Vec<Self::Form>;
}

pub trait GuardedForm: Clone + 'static {
    type Field: FieldHandle;

    /// First control inside the form matching `selector`
    fn field(&self, selector: &FieldSelector) -> Option<Self::Field>;

    /// Register `handler` for the form's submit event.
    ///
    /// Implementations cancel the submit exactly once when the handler
    /// returns [`SubmitDecision::Reject`].
    fn on_submit(&self, handler: SubmitHandler);
}

#[derive(Debug, Clone, Default)]
pub struct FormGuard {
    config: Rc<GuardConfig>,
}

impl FormGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Register a submit handler on every form currently in `document`.
    ///
    /// Forms added later are not guarded. Returns the number of forms.
    pub fn install<D: Document>(&self, document: &D) -> usize {
        let forms = document.forms();
        for form in &forms {
            self.guard_form(form);
        }

        tracing::debug!(forms = forms.len(), "form guard installed");
        forms.len()
    }

    /// Register the submit handler on a single form
    pub fn guard_form<F: GuardedForm>(&self, form: &F) {
        let guard = self.clone();
        let target = form.clone();
        form.on_submit(Box::new(move || guard.handle_submit(&target)));
    }

    /// Validate `form`, render an annotation for each invalid field and
    /// clear any left on fields that now pass.
    pub fn handle_submit<F: GuardedForm>(&self, form: &F) -> SubmitDecision {
        let url_field = form.field(&self.config.fields.url);
        let keywords_field = form.field(&self.config.fields.keywords);

        let url = url_field.as_ref().map(FieldHandle::value);
        let keywords = keywords_field.as_ref().map(FieldHandle::value);

        let decision = evaluate(&FormSnapshot {
            url: url.as_deref(),
            keywords: keywords.as_deref(),
        });

        let style = &self.config.annotation;
        for (kind, field) in [
            (GuardedField::Url, url_field.as_ref()),
            (GuardedField::Keywords, keywords_field.as_ref()),
        ] {
            let Some(field) = field else {
                continue;
            };

            match decision.annotations().iter().find(|a| a.field == kind) {
                Some(annotation) => {
                    tracing::debug!(field = ?kind, error = ?annotation.error, "submit rejected");
                    attach_error(field, style, &annotation.message());
                }
                // Value may have changed without an input event (autofill, reset)
                None => clear_error(field, style),
            }
        }

        decision
    }
}
