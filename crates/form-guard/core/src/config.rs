// File: crates/form-guard/core/src/config.rs
// Purpose: Guard configuration (field selectors, annotation markup) from form-guard.toml or JS

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Guard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GuardConfig {
    #[serde(default)]
    pub fields: FieldsConfig,

    #[serde(default)]
    pub annotation: AnnotationConfig,
}

/// Which fields of a form are validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsConfig {
    #[serde(default = "default_url_field")]
    pub url: FieldSelector,

    #[serde(default = "default_keywords_field")]
    pub keywords: FieldSelector,
}

/// A form control located by tag and `name` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub tag: String,
    pub name: String,
}

impl FieldSelector {
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
        }
    }

    /// CSS selector for `querySelector`, e.g. `input[name="website_url"]`
    pub fn css(&self) -> String {
        format!("{}[name=\"{}\"]", self.tag, css_string(&self.name))
    }

    pub fn matches(&self, tag: &str, name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag) && self.name == name
    }
}

/// Escape `value` for use inside a double-quoted CSS string
fn css_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\0' => escaped.push('\u{FFFD}'),
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\u{1}'..='\u{1F}' | '\u{7F}' => {
                escaped.push_str(&format!("\\{:x} ", c as u32));
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup of the inline error annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Element inserted after the field (default: "p")
    #[serde(default = "default_element")]
    pub element: String,

    /// Class that identifies an annotation so it can be found and removed
    #[serde(default = "default_marker_class")]
    pub marker_class: String,

    /// Presentation classes added alongside the marker
    #[serde(default = "default_extra_classes")]
    pub extra_classes: Vec<String>,

    /// Class toggled on the invalid field itself
    #[serde(default = "default_invalid_class")]
    pub invalid_class: String,
}

impl AnnotationConfig {
    /// Full `class` attribute of the annotation element
    pub fn class_name(&self) -> String {
        std::iter::once(self.marker_class.as_str())
            .chain(self.extra_classes.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// Default values
fn default_url_field() -> FieldSelector {
    FieldSelector::new("input", "website_url")
}

fn default_keywords_field() -> FieldSelector {
    FieldSelector::new("textarea", "keywords")
}

fn default_element() -> String {
    "p".to_string()
}

fn default_marker_class() -> String {
    "error-message".to_string()
}

fn default_extra_classes() -> Vec<String> {
    vec![
        "text-red-500".to_string(),
        "text-xs".to_string(),
        "italic".to_string(),
        "mt-1".to_string(),
    ]
}

fn default_invalid_class() -> String {
    "border-red-500".to_string()
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            url: default_url_field(),
            keywords: default_keywords_field(),
        }
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            element: default_element(),
            marker_class: default_marker_class(),
            extra_classes: default_extra_classes(),
            invalid_class: default_invalid_class(),
        }
    }
}

impl GuardConfig {
    /// Parse a `form-guard.toml` document; blank input means defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Failed to parse form-guard config")
    }
}
