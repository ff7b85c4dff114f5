//! Form Guard WASM
//!
//! WebAssembly bindings for the form guard. Installs submit-time validation
//! on every form of the page once the DOM is ready, and exposes the same
//! validators to JavaScript.

use form_guard_core::{self as core, FormGuard, FormSnapshot, GuardConfig};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod dom;

use dom::BrowserDocument;

/// Set panic hook and, with `auto-install`, guard the page's forms
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "auto-install")]
    install_when_ready();
}

#[cfg(feature = "auto-install")]
fn install_when_ready() {
    use web_sys::AddEventListenerOptions;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        // Not running in a page (e.g. a worker)
        return;
    };

    if !still_loading(&document.ready_state()) {
        install(&document, GuardConfig::default());
        return;
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let ready = document.clone();
    let listener = Closure::once_into_js(move || {
        install(&ready, GuardConfig::default());
    });
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        listener.unchecked_ref(),
        &options,
    ) {
        web_sys::console::warn_2(&JsValue::from_str("form-guard: could not wait for DOMContentLoaded"), &err);
    }
}

/// `document.readyState` before `DOMContentLoaded` has fired
#[cfg(any(feature = "auto-install", test))]
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn install(document: &web_sys::Document, config: GuardConfig) -> usize {
    FormGuard::new(config).install(&BrowserDocument(document.clone()))
}

/// Annotation returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FieldError {
    pub field: core::GuardedField,
    pub message: String,
}

/// Guard every form currently in the document
///
/// # Arguments
/// * `config` - optional object overriding field selectors or annotation
///   markup; same shape as `form-guard.toml`
///
/// # Returns
/// Number of forms guarded
///
/// # Example (JavaScript)
/// ```javascript
/// guardForms({ fields: { url: { tag: 'input', name: 'site' } } });
/// ```
#[wasm_bindgen(js_name = guardForms)]
pub fn guard_forms(config: JsValue) -> Result<usize, JsValue> {
    let config: GuardConfig = if config.is_undefined() || config.is_null() {
        GuardConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    Ok(install(&document, config))
}

/// Validate field values without touching the DOM
///
/// # Returns
/// Array of `{ field, message }` (empty if the form may submit)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = evaluateForm('ftp://example.com', 'seo, rust');
/// // [{ field: 'url', message: 'Please enter a valid URL including http:// or https://' }]
/// ```
#[wasm_bindgen(js_name = evaluateForm)]
pub fn evaluate_form(url: Option<String>, keywords: Option<String>) -> Result<JsValue, JsValue> {
    let decision = core::evaluate(&FormSnapshot {
        url: url.as_deref(),
        keywords: keywords.as_deref(),
    });

    let errors: Vec<FieldError> = decision
        .annotations()
        .iter()
        .map(|a| FieldError {
            field: a.field,
            message: a.message(),
        })
        .collect();

    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Quick URL validation
#[wasm_bindgen(js_name = isValidUrl)]
pub fn is_valid_url_js(value: &str) -> bool {
    core::is_valid_url(value)
}

/// Split keywords on newlines and commas, dropping blanks
#[wasm_bindgen(js_name = parseKeywords)]
pub fn parse_keywords_js(raw: &str) -> Vec<String> {
    core::parse_keywords(raw)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_ready_state() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }

    #[wasm_bindgen_test]
    fn test_url_validation() {
        assert!(is_valid_url_js("https://example.com"));
        assert!(!is_valid_url_js("ftp://example.com"));
        assert!(!is_valid_url_js("not-a-url"));
    }

    #[wasm_bindgen_test]
    fn test_keyword_parsing() {
        assert_eq!(
            parse_keywords_js("seo, blogging\nmarketing"),
            vec!["seo", "blogging", "marketing"]
        );
        assert!(parse_keywords_js(" , ,\n ").is_empty());
    }

    #[wasm_bindgen_test]
    fn test_evaluate_form() {
        let errors = evaluate_form(Some("ftp://example.com".into()), Some(",".into())).unwrap();
        let errors: Vec<FieldError> = serde_wasm_bindgen::from_value(errors).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, core::GuardedField::Url);
        assert_eq!(errors[1].message, "Please enter at least one keyword");

        let ok = evaluate_form(Some("https://example.com".into()), None).unwrap();
        let ok: Vec<FieldError> = serde_wasm_bindgen::from_value(ok).unwrap();
        assert!(ok.is_empty());
    }
}
