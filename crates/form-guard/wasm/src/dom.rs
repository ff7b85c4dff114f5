//! Browser DOM implementation of the guard's document, form and field traits

use form_guard_core::{AnnotationConfig, Document, FieldHandle, FieldSelector, GuardedForm, SubmitHandler};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

/// Log a failed DOM call; the submit handler carries on
fn warn(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(context), err);
}

#[derive(Clone)]
pub struct BrowserDocument(pub web_sys::Document);

impl Document for BrowserDocument {
    type Form = BrowserForm;

    fn forms(&self) -> Vec<BrowserForm> {
        let nodes = match self.0.query_selector_all("form") {
            Ok(nodes) => nodes,
            Err(err) => {
                warn("form-guard: querySelectorAll(\"form\") failed", &err);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlFormElement>().ok())
            .map(BrowserForm)
            .collect()
    }
}

#[derive(Clone)]
pub struct BrowserForm(pub HtmlFormElement);

impl GuardedForm for BrowserForm {
    type Field = BrowserField;

    fn field(&self, selector: &FieldSelector) -> Option<BrowserField> {
        match self.0.query_selector(&selector.css()) {
            Ok(element) => element.map(BrowserField),
            Err(err) => {
                warn("form-guard: invalid field selector", &err);
                None
            }
        }
    }

    fn on_submit(&self, mut handler: SubmitHandler) {
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if handler().is_reject() {
                event.prevent_default();
            }
        });

        if let Err(err) = self
            .0
            .add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())
        {
            warn("form-guard: could not listen for submit", &err);
        }

        // Lives as long as the page
        listener.forget();
    }
}

#[derive(Clone)]
pub struct BrowserField(pub Element);

impl BrowserField {
    fn next_annotation(&self, marker_class: &str) -> Option<Element> {
        self.0
            .next_element_sibling()
            .filter(|el| el.class_list().contains(marker_class))
    }
}

impl FieldHandle for BrowserField {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            self.0.get_attribute("value").unwrap_or_default()
        }
    }

    fn remove_annotation(&self, style: &AnnotationConfig) {
        if let Some(existing) = self.next_annotation(&style.marker_class) {
            existing.remove();
        }
    }

    fn insert_annotation(&self, style: &AnnotationConfig, message: &str) {
        let Some(document) = self.0.owner_document() else {
            return;
        };
        let Some(parent) = self.0.parent_node() else {
            return;
        };

        let annotation = match document.create_element(&style.element) {
            Ok(el) => el,
            Err(err) => {
                warn("form-guard: could not create annotation", &err);
                return;
            }
        };
        annotation.set_class_name(&style.class_name());
        annotation.set_text_content(Some(message));

        let next = self.0.next_sibling();
        if let Err(err) = parent.insert_before(&annotation, next.as_ref()) {
            warn("form-guard: could not insert annotation", &err);
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            warn("form-guard: classList.add failed", &err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            warn("form-guard: classList.remove failed", &err);
        }
    }

    fn once_on_input(&self, callback: Box<dyn FnOnce()>) {
        let options = AddEventListenerOptions::new();
        options.set_once(true);

        let listener = Closure::once_into_js(move || callback());
        if let Err(err) = self.0.add_event_listener_with_callback_and_add_event_listener_options(
            "input",
            listener.unchecked_ref(),
            &options,
        ) {
            warn("form-guard: could not listen for input", &err);
        }
    }
}
