//! The aggregate error-summary block.
//!
//! This module provides [`error_messages_for`], which collects the validation
//! errors of one or more objects into a single
//! `<div id="error_explanation" class="error_explanation">` fragment, and
//! [`SummaryOptions`] for customizing it.

use crate::bearer::SharedBearer;
use crate::context::RenderContext;
use crate::render::tag::content_tag;
use crate::target::Target;

const DEFAULT_CONTAINER_VALUE: &str = "error_explanation";
const DEFAULT_BODY: &str = "There were problems with the following fields:";
const DEFAULT_HEADER_TAG: &str = "h2";

/// Options for [`error_messages_for`].
///
/// All options default to the standard summary shape; builder methods
/// override individual pieces.
///
/// Header and body text follow the same suppression rule: leaving the option
/// unset renders the default text, setting it to `""` suppresses the element
/// entirely, and any other value replaces the text verbatim. The `id` and
/// `class` attributes both default to `"error_explanation"`; setting one to
/// `""` omits that attribute from the container.
///
/// # Example
///
/// ```rust
/// use redink::SummaryOptions;
///
/// let options = SummaryOptions::new()
///     .object_name("chunky_bacon")
///     .header_message("Yikes! Some errors")
///     .message("");
/// ```
#[derive(Clone, Default)]
pub struct SummaryOptions {
    object_name: Option<String>,
    objects: Option<Vec<SharedBearer>>,
    header_message: Option<String>,
    message: Option<String>,
    header_tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
}

impl SummaryOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the subject noun in the default header phrase.
    ///
    /// Underscores become spaces when the header is composed, so
    /// `"chunky_bacon"` reads as "chunky bacon".
    pub fn object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = Some(name.into());
        self
    }

    /// Renders for exactly this object, bypassing name resolution.
    ///
    /// Passing `None` is the explicit-nil case: the call renders nothing,
    /// regardless of what the targets would have resolved to.
    pub fn object(mut self, object: Option<SharedBearer>) -> Self {
        self.objects = Some(object.into_iter().collect());
        self
    }

    /// Renders for exactly these objects, bypassing name resolution.
    pub fn objects(mut self, objects: Vec<SharedBearer>) -> Self {
        self.objects = Some(objects);
        self
    }

    /// Overrides the header line; `""` suppresses it.
    pub fn header_message(mut self, text: impl Into<String>) -> Self {
        self.header_message = Some(text.into());
        self
    }

    /// Overrides the body paragraph; `""` suppresses it.
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    /// Sets the element name used for the header (default `h2`).
    pub fn header_tag(mut self, tag: impl Into<String>) -> Self {
        self.header_tag = Some(tag.into());
        self
    }

    /// Overrides the container's `id` attribute; `""` omits it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Overrides the container's `class` attribute; `""` omits it.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Returns the attribute value to emit: the default when unset, nothing when
/// explicitly blanked.
fn attr_value(option: &Option<String>) -> Option<&str> {
    match option {
        None => Some(DEFAULT_CONTAINER_VALUE),
        Some(value) if value.is_empty() => None,
        Some(value) => Some(value),
    }
}

/// Renders the aggregate error summary for one or more targets.
///
/// Targets are resolved in order against the context; names without a
/// binding are dropped. If the options carry an explicit object override it
/// replaces name resolution entirely. When no resolved object has any
/// errors, the result is the empty string with no container at all.
///
/// The header subject is the `object_name` override if given, otherwise the
/// model name of the first resolved object, so swapping target order swaps
/// the subject noun along with the message order. Messages are inserted
/// verbatim, without escaping.
///
/// # Example
///
/// ```rust
/// use redink::{ErrorBearer, FieldErrors, RenderContext, SummaryOptions, Target};
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
/// let html = redink::error_messages_for(
///     &context,
///     &[Target::name("post")],
///     &SummaryOptions::new(),
/// );
/// assert!(html.contains("1 error prohibited this post from being saved"));
/// assert!(html.contains("<li>Author name can't be empty</li>"));
/// ```
pub fn error_messages_for(
    context: &RenderContext,
    targets: &[Target],
    options: &SummaryOptions,
) -> String {
    let objects: Vec<SharedBearer> = match &options.objects {
        Some(overrides) => overrides.clone(),
        None => targets
            .iter()
            .filter_map(|target| target.resolve(context))
            .collect(),
    };

    let count: usize = objects.iter().map(|object| object.errors().count()).sum();
    if count == 0 {
        return String::new();
    }

    // count > 0 guarantees at least one object, so first() always names one
    let display_name = options
        .object_name
        .clone()
        .or_else(|| objects.first().map(|object| object.model_name().to_string()))
        .unwrap_or_default();

    let header = match &options.header_message {
        Some(text) => text.clone(),
        None => {
            let noun = if count == 1 { "error" } else { "errors" };
            format!(
                "{} {} prohibited this {} from being saved",
                count,
                noun,
                display_name.replace('_', " ")
            )
        }
    };

    let body = match &options.message {
        Some(text) => text.clone(),
        None => DEFAULT_BODY.to_string(),
    };

    let mut items = String::new();
    for object in &objects {
        for message in object.errors().full_messages() {
            items.push_str(&content_tag("li", &[], &message));
        }
    }

    let header_tag = options.header_tag.as_deref().unwrap_or(DEFAULT_HEADER_TAG);

    let mut contents = String::new();
    if !header.is_empty() {
        contents.push_str(&content_tag(header_tag, &[], &header));
    }
    if !body.is_empty() {
        contents.push_str(&content_tag("p", &[], &body));
    }
    contents.push_str(&content_tag("ul", &[], &items));

    // id before class is part of the output contract
    let mut attrs: Vec<(&str, &str)> = Vec::new();
    if let Some(id) = attr_value(&options.id) {
        attrs.push(("id", id));
    }
    if let Some(class) = attr_value(&options.class) {
        attrs.push(("class", class));
    }

    content_tag("div", &attrs, &contents)
}
