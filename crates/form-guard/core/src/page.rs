//! In-memory page for driving the guard without a browser
//!
//! Models just enough of the DOM: forms holding named controls, an ordered
//! run of elements following each control, a class list, one-shot input
//! observers and submit listeners.

use std::cell::{Cell, RefCell};
use std::mem;
use std::rc::Rc;

use crate::annotation::FieldHandle;
use crate::config::{AnnotationConfig, FieldSelector};
use crate::guard::{Document, GuardedForm, SubmitHandler};

/// Element rendered immediately after a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticElement {
    pub tag: String,
    pub class_name: String,
    pub text: String,
}

impl SyntheticElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }
}

#[derive(Default)]
struct FieldState {
    tag: String,
    name: String,
    value: RefCell<String>,
    classes: RefCell<Vec<String>>,
    following: RefCell<Vec<SyntheticElement>>,
    input_observers: RefCell<Vec<Box<dyn FnOnce()>>>,
    removals: Cell<usize>,
}

#[derive(Clone)]
pub struct SyntheticField(Rc<FieldState>);

impl SyntheticField {
    pub fn new(tag: &str, name: &str, value: &str) -> Self {
        Self(Rc::new(FieldState {
            tag: tag.to_ascii_lowercase(),
            name: name.to_string(),
            value: RefCell::new(value.to_string()),
            ..FieldState::default()
        }))
    }

    pub fn input(name: &str, value: &str) -> Self {
        Self::new("input", name, value)
    }

    pub fn textarea(name: &str, value: &str) -> Self {
        Self::new("textarea", name, value)
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Change the value the way typing does, notifying input observers
    pub fn input_value(&self, value: &str) {
        *self.0.value.borrow_mut() = value.to_string();
        let observers = mem::take(&mut *self.0.input_observers.borrow_mut());
        for observer in observers {
            observer();
        }
    }

    /// Set the value without firing input observers (e.g. scripted reset)
    pub fn set_value(&self, value: &str) {
        *self.0.value.borrow_mut() = value.to_string();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    /// Elements currently following the field, nearest first
    pub fn following(&self) -> Vec<SyntheticElement> {
        self.0.following.borrow().clone()
    }

    /// Text of every annotation element following the field
    pub fn annotation_messages(&self) -> Vec<String> {
        self.0
            .following
            .borrow()
            .iter()
            .filter(|el| el.has_class(&AnnotationConfig::default().marker_class))
            .map(|el| el.text.clone())
            .collect()
    }

    pub fn pending_input_observers(&self) -> usize {
        self.0.input_observers.borrow().len()
    }

    /// How many times an existing annotation was actually removed
    pub fn annotation_removals(&self) -> usize {
        self.0.removals.get()
    }

    /// Place an unrelated element after the field
    pub fn with_sibling(self, element: SyntheticElement) -> Self {
        self.0.following.borrow_mut().push(element);
        self
    }
}

impl FieldHandle for SyntheticField {
    fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    fn remove_annotation(&self, style: &AnnotationConfig) {
        let mut following = self.0.following.borrow_mut();
        if following
            .first()
            .is_some_and(|el| el.has_class(&style.marker_class))
        {
            following.remove(0);
            self.0.removals.set(self.0.removals.get() + 1);
        }
    }

    fn insert_annotation(&self, style: &AnnotationConfig, message: &str) {
        self.0.following.borrow_mut().insert(
            0,
            SyntheticElement {
                tag: style.element.clone(),
                class_name: style.class_name(),
                text: message.to_string(),
            },
        );
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.0.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn once_on_input(&self, callback: Box<dyn FnOnce()>) {
        self.0.input_observers.borrow_mut().push(callback);
    }
}

#[derive(Default)]
struct FormState {
    fields: Vec<SyntheticField>,
    handlers: RefCell<Vec<SubmitHandler>>,
}

/// Result of a synthetic submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The form would be sent to its action
    pub sent: bool,
    /// Times `preventDefault` was called on the event
    pub cancellations: usize,
}

#[derive(Clone, Default)]
pub struct SyntheticForm(Rc<FormState>);

impl SyntheticForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(self, field: SyntheticField) -> Self {
        let mut state = Rc::try_unwrap(self.0).unwrap_or_else(|shared| FormState {
            fields: shared.fields.clone(),
            handlers: RefCell::default(),
        });
        state.fields.push(field);
        Self(Rc::new(state))
    }

    pub fn fields(&self) -> &[SyntheticField] {
        &self.0.fields
    }

    pub fn submit_handlers(&self) -> usize {
        self.0.handlers.borrow().len()
    }

    /// Dispatch a submit event through every registered handler
    pub fn submit(&self) -> SubmitOutcome {
        let mut cancellations = 0;
        for handler in self.0.handlers.borrow_mut().iter_mut() {
            if handler().is_reject() {
                cancellations += 1;
            }
        }

        SubmitOutcome {
            sent: cancellations == 0,
            cancellations,
        }
    }
}

impl GuardedForm for SyntheticForm {
    type Field = SyntheticField;

    fn field(&self, selector: &FieldSelector) -> Option<SyntheticField> {
        self.0
            .fields
            .iter()
            .find(|field| selector.matches(field.tag(), field.name()))
            .cloned()
    }

    fn on_submit(&self, handler: SubmitHandler) {
        self.0.handlers.borrow_mut().push(handler);
    }
}

/// A page holding a fixed set of forms
#[derive(Clone, Default)]
pub struct SyntheticPage {
    forms: Vec<SyntheticForm>,
}

impl SyntheticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(mut self, form: SyntheticForm) -> Self {
        self.forms.push(form);
        self
    }

    /// Add a form after the guard was installed
    pub fn append_form(&mut self, form: SyntheticForm) {
        self.forms.push(form);
    }

    pub fn form(&self, index: usize) -> Option<&SyntheticForm> {
        self.forms.get(index)
    }
}

impl Document for SyntheticPage {
    type Form = SyntheticForm;

    fn forms(&self) -> Vec<SyntheticForm> {
        self.forms.clone()
    }
}
