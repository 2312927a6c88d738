//! Markdown and HTML renderers backed by Handlebars templates.
//!
//! The templates live in `templates/` and are compiled into the binary.
//! Rendering runs in strict mode, so a placeholder with no matching field
//! fails instead of rendering blank.

use chrono::NaiveDate;
use handlebars::{Handlebars, RenderErrorReason};
use serde_json::Value;

use crate::domain::license::prose::long_date;
use crate::domain::license::LicenseFields;
use crate::ports::{DocumentRenderer, OutputFormat, RenderContext, RenderError, RenderedDocument};

pub const MARKDOWN_TEMPLATE: &str = include_str!("../../../templates/licence_a.md.hbs");
pub const HTML_TEMPLATE: &str = include_str!("../../../templates/licence_a.html.hbs");

/// Name of the derived execution-date placeholder.
pub const CURRENT_DATE: &str = "current_date";

/// How interpolated values are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escaping {
    /// Values are inserted as typed.
    None,
    /// Values are HTML-escaped.
    Html,
}

/// Template context: every field by name plus `current_date`.
pub fn template_context(
    fields: &LicenseFields,
    executed_on: NaiveDate,
) -> Result<Value, RenderError> {
    let mut context =
        serde_json::to_value(fields).map_err(|e| RenderError::template(e.to_string()))?;

    if let Value::Object(map) = &mut context {
        map.insert(
            CURRENT_DATE.to_string(),
            Value::String(long_date(executed_on)),
        );
    }

    Ok(context)
}

/// Renders `source` against the licence fields.
///
/// # Errors
///
/// `RenderError::MissingField` when the template names a placeholder the
/// context lacks; `RenderError::Template` for any other engine failure.
pub fn render_licence_template(
    source: &str,
    escaping: Escaping,
    fields: &LicenseFields,
    executed_on: NaiveDate,
) -> Result<String, RenderError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    if escaping == Escaping::None {
        handlebars.register_escape_fn(handlebars::no_escape);
    }

    let context = template_context(fields, executed_on)?;

    handlebars
        .render_template(source, &context)
        .map_err(|e| match e.reason() {
            RenderErrorReason::MissingVariable(Some(name)) => RenderError::missing_field(name),
            RenderErrorReason::MissingVariable(None) => RenderError::missing_field("(unnamed)"),
            _ => RenderError::template(e.to_string()),
        })
}

/// Renders the licence as Markdown. Values are not escaped.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    fields: LicenseFields,
    context: RenderContext,
}

impl MarkdownRenderer {
    pub fn new(fields: LicenseFields, context: RenderContext) -> Self {
        Self { fields, context }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        render_licence_template(
            MARKDOWN_TEMPLATE,
            Escaping::None,
            &self.fields,
            self.context.executed_on,
        )
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn context(&self) -> &RenderContext {
        &self.context
    }

    fn generate(&self) -> Result<RenderedDocument, RenderError> {
        self.render().map(RenderedDocument::Markdown)
    }

    fn render_bytes(&self) -> Result<Vec<u8>, RenderError> {
        self.render().map(String::into_bytes)
    }
}

/// Renders the licence as a standalone, print-styled HTML page.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    fields: LicenseFields,
    context: RenderContext,
}

impl HtmlRenderer {
    pub fn new(fields: LicenseFields, context: RenderContext) -> Self {
        Self { fields, context }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        render_licence_template(
            HTML_TEMPLATE,
            Escaping::Html,
            &self.fields,
            self.context.executed_on,
        )
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn context(&self) -> &RenderContext {
        &self.context
    }

    fn generate(&self) -> Result<RenderedDocument, RenderError> {
        self.render().map(RenderedDocument::Html)
    }

    fn render_bytes(&self) -> Result<Vec<u8>, RenderError> {
        self.render().map(String::into_bytes)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
