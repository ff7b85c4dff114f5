/// End-to-end submit behaviour of the form guard against the synthetic page
///
/// Each test builds a page, installs the guard once (as page-ready would),
/// then submits and edits fields the way a user does.
use form_guard_core::page::{SyntheticField, SyntheticForm, SyntheticPage};
use form_guard_core::{Document, FormGuard, GuardConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;

const URL_MESSAGE: &str = "Please enter a valid URL including http:// or https://";
const KEYWORDS_MESSAGE: &str = "Please enter at least one keyword";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

struct Planner {
    page: SyntheticPage,
    url: SyntheticField,
    keywords: SyntheticField,
}

impl Planner {
    fn form(&self) -> &SyntheticForm {
        self.page.form(0).expect("planner form")
    }
}

fn guarded_planner(url: &str, keywords: &str) -> Planner {
    init_tracing();

    let url = SyntheticField::input("website_url", url);
    let keywords = SyntheticField::textarea("keywords", keywords);
    let page = SyntheticPage::new().with_form(
        SyntheticForm::new()
            .with_field(url.clone())
            .with_field(keywords.clone()),
    );

    assert_eq!(FormGuard::new(GuardConfig::default()).install(&page), 1);
    Planner {
        page,
        url,
        keywords,
    }
}

#[test]
fn test_ftp_url_blocks_submit() {
    let planner = guarded_planner("ftp://example.com", "");

    let outcome = planner.form().submit();

    assert!(!outcome.sent);
    assert_eq!(planner.url.annotation_messages(), vec![URL_MESSAGE.to_string()]);
    assert!(planner.url.has_class("border-red-500"));
    assert!(planner.keywords.annotation_messages().is_empty());
}

#[test]
fn test_valid_form_is_sent() {
    let planner = guarded_planner("https://example.com", "seo, blogging\nmarketing");

    let outcome = planner.form().submit();

    assert!(outcome.sent);
    assert_eq!(outcome.cancellations, 0);
    assert!(planner.url.annotation_messages().is_empty());
    assert!(planner.keywords.annotation_messages().is_empty());
    assert!(!planner.url.has_class("border-red-500"));
}

#[test]
fn test_separator_only_keywords_block_submit() {
    let planner = guarded_planner("", " , ,\n ");

    let outcome = planner.form().submit();

    assert!(!outcome.sent);
    assert_eq!(
        planner.keywords.annotation_messages(),
        vec![KEYWORDS_MESSAGE.to_string()]
    );
    assert!(planner.keywords.has_class("border-red-500"));
}

#[test]
fn test_both_invalid_cancel_once() {
    let planner = guarded_planner("example.com", ",");

    let outcome = planner.form().submit();

    assert!(!outcome.sent);
    assert_eq!(outcome.cancellations, 1);
    assert_eq!(planner.url.annotation_messages(), vec![URL_MESSAGE.to_string()]);
    assert_eq!(
        planner.keywords.annotation_messages(),
        vec![KEYWORDS_MESSAGE.to_string()]
    );
}

#[rstest]
#[case("", "")]
#[case("", "rust")]
#[case("http://example.com", "")]
fn test_empty_fields_are_skipped(#[case] url: &str, #[case] keywords: &str) {
    let planner = guarded_planner(url, keywords);
    assert!(planner.form().submit().sent);
}

#[test]
fn test_form_without_guarded_fields() {
    init_tracing();
    let other = SyntheticField::input("email", "not a url");
    let page = SyntheticPage::new().with_form(SyntheticForm::new().with_field(other.clone()));

    FormGuard::default().install(&page);

    assert!(page.forms()[0].submit().sent);
    assert!(other.annotation_messages().is_empty());
}

#[test]
fn test_resubmit_keeps_single_annotation() {
    let planner = guarded_planner("ftp://example.com", "");

    planner.form().submit();
    planner.form().submit();
    planner.form().submit();

    assert_eq!(planner.url.annotation_messages().len(), 1);
}

#[test]
fn test_edit_clears_annotation_once() {
    let planner = guarded_planner("ftp://example.com", ",");
    planner.form().submit();

    planner.url.input_value("https://example.com");

    assert!(planner.url.annotation_messages().is_empty());
    assert!(!planner.url.has_class("border-red-500"));
    assert_eq!(planner.url.annotation_removals(), 1);
    // the other field keeps its annotation
    assert_eq!(
        planner.keywords.annotation_messages(),
        vec![KEYWORDS_MESSAGE.to_string()]
    );

    planner.url.input_value("https://example.org");
    assert_eq!(planner.url.annotation_removals(), 1);
    assert_eq!(planner.url.pending_input_observers(), 0);
}

#[test]
fn test_fixed_value_then_resubmit() {
    let planner = guarded_planner("nope", "seo");
    assert!(!planner.form().submit().sent);

    planner.url.input_value("https://example.com");

    assert!(planner.form().submit().sent);
    assert!(planner.url.annotation_messages().is_empty());
}

#[test]
fn test_forms_are_independent() {
    init_tracing();
    let bad = SyntheticField::input("website_url", "ftp://example.com");
    let good = SyntheticField::input("website_url", "https://example.com");
    let page = SyntheticPage::new()
        .with_form(SyntheticForm::new().with_field(bad.clone()))
        .with_form(SyntheticForm::new().with_field(good.clone()));

    FormGuard::default().install(&page);
    let forms = page.forms();

    assert!(!forms[0].submit().sent);
    assert!(forms[1].submit().sent);
    assert!(good.annotation_messages().is_empty());
}

#[test]
fn test_forms_added_after_install_are_unguarded() {
    init_tracing();
    let mut page = SyntheticPage::new().with_form(SyntheticForm::new());
    FormGuard::default().install(&page);

    let late = SyntheticField::input("website_url", "ftp://example.com");
    page.append_form(SyntheticForm::new().with_field(late.clone()));

    let forms = page.forms();
    assert_eq!(forms[1].submit_handlers(), 0);
    assert!(forms[1].submit().sent);
    assert!(late.annotation_messages().is_empty());
}

#[test]
fn test_annotation_markup() {
    let planner = guarded_planner("ftp://example.com", "");
    planner.form().submit();

    let following = planner.url.following();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].tag, "p");
    assert_eq!(
        following[0].class_name,
        "error-message text-red-500 text-xs italic mt-1"
    );
    assert_eq!(following[0].text, URL_MESSAGE);
}

#[test]
fn test_scripted_fix_cleared_by_next_submit() {
    let planner = guarded_planner("ftp://example.com", " , ");
    assert!(!planner.form().submit().sent);

    // autofill or form.reset() change values without an input event
    planner.url.set_value("https://example.com");
    planner.keywords.set_value("seo");

    assert!(planner.form().submit().sent);
    assert!(planner.url.annotation_messages().is_empty());
    assert!(!planner.url.has_class("border-red-500"));
    assert!(planner.keywords.annotation_messages().is_empty());
    assert!(!planner.keywords.has_class("border-red-500"));
}

#[test]
fn test_emptied_field_cleared_by_next_submit() {
    let planner = guarded_planner("nope", "");
    planner.form().submit();

    planner.url.set_value("");

    assert!(planner.form().submit().sent);
    assert!(planner.url.annotation_messages().is_empty());
    assert_eq!(planner.url.annotation_removals(), 1);
}
