//! The inline per-field error wrapper.
//!
//! This module provides [`error_message_on`], which wraps a single field's
//! first error message in a styled inline tag, and [`FieldOptions`] for
//! customizing the wrapper.

use crate::bearer::ColumnKind;
use crate::context::RenderContext;
use crate::render::tag::content_tag;
use crate::target::Target;

/// Options for [`error_message_on`].
///
/// Defaults: no surrounding text, css class `"formError"`, wrapping tag
/// `"div"`.
///
/// # Example
///
/// ```rust
/// use redink::FieldOptions;
///
/// let options = FieldOptions::new()
///     .css_class("differentError")
///     .prepend_text("before")
///     .append_text("after")
///     .html_tag("span");
/// ```
#[derive(Debug, Clone)]
pub struct FieldOptions {
    prepend_text: String,
    append_text: String,
    css_class: String,
    html_tag: String,
}

impl FieldOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text or markup inserted immediately before the message.
    pub fn prepend_text(mut self, text: impl Into<String>) -> Self {
        self.prepend_text = text.into();
        self
    }

    /// Text or markup inserted immediately after the message.
    pub fn append_text(mut self, text: impl Into<String>) -> Self {
        self.append_text = text.into();
        self
    }

    /// The class attribute of the wrapping tag (default `formError`).
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }

    /// The name of the wrapping tag (default `div`).
    pub fn html_tag(mut self, tag: impl Into<String>) -> Self {
        self.html_tag = tag.into();
        self
    }
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            prepend_text: String::new(),
            append_text: String::new(),
            css_class: "formError".to_string(),
            html_tag: "div".to_string(),
        }
    }
}

/// Renders the inline error wrapper for one field of one object.
///
/// Resolves the target through the context; an unresolved target or a field
/// with no recorded messages renders the empty string. Otherwise the field's
/// first message is wrapped as
/// `<{tag} class="{css_class}">{prepend}{message}{append}</{tag}>`, with
/// everything passed through verbatim.
///
/// When the object exposes column metadata for the field, a `Text` column
/// routes the message through the multi-line formatter and every other kind
/// through the plain one. Neither alters the message; the lookup is kept for
/// compatibility with models that publish column metadata.
///
/// # Example
///
/// ```rust
/// use redink::{ErrorBearer, FieldErrors, FieldOptions, RenderContext, Target};
///
/// struct Post {
///     errors: FieldErrors,
/// }
///
/// impl ErrorBearer for Post {
///     fn errors(&self) -> &FieldErrors {
///         &self.errors
///     }
///
///     fn model_name(&self) -> &str {
///         "post"
///     }
/// }
///
/// let mut errors = FieldErrors::new();
/// errors.add("author_name", "can't be empty");
///
/// let context = RenderContext::new();
/// context.bind("post", Post { errors }).unwrap();
///
/// let html = redink::error_message_on(
///     &context,
///     &Target::name("post"),
///     "author_name",
///     &FieldOptions::new(),
/// );
/// assert_eq!(html, "<div class=\"formError\">can't be empty</div>");
/// ```
pub fn error_message_on(
    context: &RenderContext,
    target: &Target,
    field: &str,
    options: &FieldOptions,
) -> String {
    let Some(object) = target.resolve(context) else {
        return String::new();
    };

    let messages = object.errors().on(field);
    let Some(first) = messages.first() else {
        return String::new();
    };

    let rendered = match object.column_for_attribute(field) {
        Some(column) if column.kind == ColumnKind::Text => format_multiline(first),
        _ => first.clone(),
    };

    let body = format!("{}{}{}", options.prepend_text, rendered, options.append_text);
    content_tag(&options.html_tag, &[("class", &options.css_class)], &body)
}

/// Formatter for messages on `Text` columns.
///
/// Message text is emitted unchanged for every column kind; this is the
/// single seam to revisit if text columns ever need real multi-line
/// treatment.
fn format_multiline(message: &str) -> String {
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FieldOptions::default();
        assert_eq!(options.css_class, "formError");
        assert_eq!(options.html_tag, "div");
        assert!(options.prepend_text.is_empty());
        assert!(options.append_text.is_empty());
    }

    #[test]
    fn test_unresolved_target_renders_nothing() {
        let context = RenderContext::new();
        let html = error_message_on(
            &context,
            &Target::name("notthere"),
            "notthere",
            &FieldOptions::new(),
        );
        assert_eq!(html, "");
    }

    #[test]
    fn test_multiline_formatter_leaves_message_unchanged() {
        assert_eq!(format_multiline("foo"), "foo");
        assert_eq!(format_multiline("line one\nline two"), "line one\nline two");
    }
}
