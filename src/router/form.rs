// file: src/router/form.rs
// version: 1.0.0
// guid: a6f7cb03-be9e-43a7-8716-0077c7423eb8

//! HTML form extraction for router pages

use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// A single named `<input>` inside a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: Option<String>,
    pub input_type: String,
}

impl FormField {
    pub fn is_hidden(&self) -> bool {
        self.input_type.eq_ignore_ascii_case("hidden")
    }
}

/// A form located on a page: where it submits and what it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescriptor {
    pub action: String,
    pub method: String,
    pub fields: Vec<FormField>,
}

impl FormDescriptor {
    /// Value of the hidden input called `name`
    pub fn hidden_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.is_hidden() && field.name == name)
            .and_then(|field| field.value.as_deref())
    }
}

fn form_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("form").expect("static selector"))
}

fn input_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("input").expect("static selector"))
}

fn form_or_input_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("form, input").expect("static selector"))
}

/// Find the first form whose action equals `action` and whose method matches
/// `method` case-insensitively. A form without a method attribute is GET.
pub fn find_form(body: &str, action: &str, method: &str) -> Option<FormDescriptor> {
    let document = Html::parse_document(body);

    let form = document
        .select(form_selector())
        .find(|form| {
            let form_action = form.value().attr("action").map(str::trim);
            let form_method = form.value().attr("method").unwrap_or("get").trim();
            form_action == Some(action) && form_method.eq_ignore_ascii_case(method)
        })
        .map(|form| describe(&document, form));
    form
}

/// Value of the first hidden input called `name` anywhere on the page
pub fn find_hidden_input(body: &str, name: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let value = document
        .select(input_selector())
        .filter_map(field_of)
        .find(|field| field.is_hidden() && field.name == name)
        .and_then(|field| field.value);
    value
}

fn describe(document: &Html, form: ElementRef<'_>) -> FormDescriptor {
    let element = form.value();
    let mut fields: Vec<FormField> = form.select(input_selector()).filter_map(field_of).collect();
    if fields.is_empty() {
        fields = trailing_fields(document, form);
    }

    FormDescriptor {
        action: element.attr("action").unwrap_or_default().trim().to_string(),
        method: element.attr("method").unwrap_or("get").trim().to_ascii_lowercase(),
        fields,
    }
}

/// Inputs that follow `form` in document order, up to the next form.
///
/// A `<form>` opened directly inside a `<table>` is closed immediately by the
/// HTML5 tree builder, so its inputs end up as siblings instead of children.
fn trailing_fields(document: &Html, form: ElementRef<'_>) -> Vec<FormField> {
    document
        .select(form_or_input_selector())
        .skip_while(|element| element.id() != form.id())
        .skip(1)
        .take_while(|element| element.value().name() != "form")
        .filter_map(field_of)
        .collect()
}

fn field_of(input: ElementRef<'_>) -> Option<FormField> {
    let element = input.value();
    let name = element.attr("name")?;
    Some(FormField {
        name: name.to_string(),
        value: element.attr("value").map(str::to_string),
        input_type: element.attr("type").unwrap_or("text").to_string(),
    })
}
