//! Inline error annotations
//!
//! An annotation is a message element inserted immediately after a field plus
//! an "invalid" class on the field. A field carries at most one annotation;
//! it clears itself the next time the field's value changes.

use crate::config::AnnotationConfig;

/// A form control as seen by the guard.
///
/// Implemented over the browser DOM by the wasm adapter and in memory by
/// [`crate::page::SyntheticField`]. Handles are cheap clones of a reference
/// to the same underlying control.
pub trait FieldHandle: Clone + 'static {
    /// Current value of the control
    fn value(&self) -> String;

    /// Remove the annotation element following this field, if any
    fn remove_annotation(&self, style: &AnnotationConfig);

    /// Insert an annotation element with `message` right after this field
    fn insert_annotation(&self, style: &AnnotationConfig, message: &str);

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Run `callback` on the next value change only, then forget it
    fn once_on_input(&self, callback: Box<dyn FnOnce()>);
}

/// Show `message` next to `field`, replacing any annotation already there.
pub fn attach_error<F: FieldHandle>(field: &F, style: &AnnotationConfig, message: &str) {
    field.remove_annotation(style);
    field.insert_annotation(style, message);
    field.add_class(&style.invalid_class);

    let target = field.clone();
    let style = style.clone();
    field.once_on_input(Box::new(move || clear_error(&target, &style)));
}

/// Remove the annotation and the invalid class. Safe to call when neither is present.
pub fn clear_error<F: FieldHandle>(field: &F, style: &AnnotationConfig) {
    tracing::trace!(marker = %style.marker_class, "clearing field annotation");
    field.remove_annotation(style);
    field.remove_class(&style.invalid_class);
}
