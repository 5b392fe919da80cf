//! Integration tests for the error summary renderer.

use std::sync::Arc;

use redink::{
    error_messages_for, Column, ColumnKind, ErrorBearer, FieldErrors, RenderContext,
    SharedBearer, SummaryOptions, Target,
};

struct Post {
    errors: FieldErrors,
}

impl ErrorBearer for Post {
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn model_name(&self) -> &str {
        "post"
    }

    fn column_for_attribute(&self, field: &str) -> Option<Column> {
        match field {
            "title" => Some(Column::new(ColumnKind::String, "title", "Title")),
            "body" => Some(Column::new(ColumnKind::Text, "body", "Body")),
            _ => None,
        }
    }
}

struct User {
    errors: FieldErrors,
}

impl ErrorBearer for User {
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn model_name(&self) -> &str {
        "user"
    }
}

fn post_with_error() -> SharedBearer {
    let mut errors = FieldErrors::new();
    errors.add("author_name", "can't be empty");
    Arc::new(Post { errors })
}

fn user_with_error() -> SharedBearer {
    let mut errors = FieldErrors::new();
    errors.add("email", "can't be empty");
    Arc::new(User { errors })
}

fn clean_post() -> SharedBearer {
    Arc::new(Post {
        errors: FieldErrors::new(),
    })
}

fn context_with_post_and_user() -> RenderContext {
    let context = RenderContext::new();
    context.bind_shared("post", post_with_error()).unwrap();
    context.bind_shared("user", user_with_error()).unwrap();
    context
}

fn render(context: &RenderContext, names: &[&str], options: SummaryOptions) -> String {
    let targets: Vec<Target> = names.iter().map(|name| Target::name(*name)).collect();
    error_messages_for(context, &targets, &options)
}

#[test]
fn test_single_object_summary() {
    let context = context_with_post_and_user();

    assert_eq!(
        render(&context, &["post"], SummaryOptions::new()),
        "<div id=\"error_explanation\" class=\"error_explanation\">\
         <h2>1 error prohibited this post from being saved</h2>\
         <p>There were problems with the following fields:</p>\
         <ul><li>Author name can't be empty</li></ul></div>"
    );
}

#[test]
fn test_unresolved_name_renders_nothing() {
    let context = context_with_post_and_user();
    assert_eq!(render(&context, &["notthere"], SummaryOptions::new()), "");
}

#[test]
fn test_empty_target_list_renders_nothing() {
    let context = context_with_post_and_user();
    assert_eq!(render(&context, &[], SummaryOptions::new()), "");
}

#[test]
fn test_object_without_errors_renders_nothing() {
    let context = RenderContext::new();
    context.bind_shared("post", clean_post()).unwrap();
    assert_eq!(render(&context, &["post"], SummaryOptions::new()), "");
}

#[test]
fn test_two_objects_pluralize_and_keep_order() {
    let context = context_with_post_and_user();

    assert_eq!(
        render(&context, &["post", "user"], SummaryOptions::new()),
        "<div id=\"error_explanation\" class=\"error_explanation\">\
         <h2>2 errors prohibited this post from being saved</h2>\
         <p>There were problems with the following fields:</p>\
         <ul><li>Author name can't be empty</li><li>Email can't be empty</li></ul></div>"
    );
}

#[test]
fn test_reversed_order_swaps_subject_and_messages() {
    let context = context_with_post_and_user();

    assert_eq!(
        render(&context, &["user", "post"], SummaryOptions::new()),
        "<div id=\"error_explanation\" class=\"error_explanation\">\
         <h2>2 errors prohibited this user from being saved</h2>\
         <p>There were problems with the following fields:</p>\
         <ul><li>Email can't be empty</li><li>Author name can't be empty</li></ul></div>"
    );
}

#[test]
fn test_object_name_overrides_subject() {
    let context = context_with_post_and_user();

    let html = render(
        &context,
        &["user", "post"],
        SummaryOptions::new().object_name("post"),
    );
    assert!(html.contains("<h2>2 errors prohibited this post from being saved</h2>"));
    // message order still follows the target list
    assert!(html.contains("<ul><li>Email can't be empty</li><li>Author name can't be empty</li></ul>"));
}

#[test]
fn test_object_name_underscores_become_spaces() {
    let context = context_with_post_and_user();

    let html = render(
        &context,
        &["user", "post"],
        SummaryOptions::new().object_name("chunky_bacon"),
    );
    assert!(html.contains("<h2>2 errors prohibited this chunky bacon from being saved</h2>"));
}

#[test]
fn test_arbitrary_object_name() {
    let context = context_with_post_and_user();

    let html = render(
        &context,
        &["user", "post"],
        SummaryOptions::new().object_name("monkey"),
    );
    assert!(html.contains("<h2>2 errors prohibited this monkey from being saved</h2>"));
}

#[test]
fn test_blank_header_and_message_suppress_but_keep_list() {
    let context = context_with_post_and_user();

    assert_eq!(
        render(
            &context,
            &["user", "post"],
            SummaryOptions::new().header_message("").message(""),
        ),
        "<div id=\"error_explanation\" class=\"error_explanation\">\
         <ul><li>Email can't be empty</li><li>Author name can't be empty</li></ul></div>"
    );
}

#[test]
fn test_blank_header_alone_keeps_body() {
    let context = context_with_post_and_user();

    let html = render(&context, &["post"], SummaryOptions::new().header_message(""));
    assert!(!html.contains("<h2>"));
    assert!(html.contains("<p>There were problems with the following fields:</p>"));
}

#[test]
fn test_blank_message_alone_keeps_header() {
    let context = context_with_post_and_user();

    let html = render(&context, &["post"], SummaryOptions::new().message(""));
    assert!(html.contains("<h2>1 error prohibited this post from being saved</h2>"));
    assert!(!html.contains("<p>"));
}

#[test]
fn test_header_and_message_overrides() {
    let context = context_with_post_and_user();

    assert_eq!(
        render(
            &context,
            &["user", "post"],
            SummaryOptions::new()
                .header_message("Yikes! Some errors")
                .message("Please fix the following fields and resubmit:"),
        ),
        "<div id=\"error_explanation\" class=\"error_explanation\">\
         <h2>Yikes! Some errors</h2>\
         <p>Please fix the following fields and resubmit:</p>\
         <ul><li>Email can't be empty</li><li>Author name can't be empty</li></ul></div>"
    );
}

#[test]
fn test_header_tag_option() {
    let context = context_with_post_and_user();

    let html = render(&context, &["post"], SummaryOptions::new().header_tag("h3"));
    assert!(html.contains("<h3>1 error prohibited this post from being saved</h3>"));
    assert!(!html.contains("<h2>"));
}

#[test]
fn test_id_and_class_overrides() {
    let context = context_with_post_and_user();

    let html = render(
        &context,
        &["post"],
        SummaryOptions::new().id("summary").class("errors"),
    );
    assert!(html.starts_with("<div id=\"summary\" class=\"errors\">"));
}

#[test]
fn test_blank_id_omits_attribute() {
    let context = context_with_post_and_user();

    let html = render(&context, &["post"], SummaryOptions::new().id(""));
    assert!(html.starts_with("<div class=\"error_explanation\">"));
}

#[test]
fn test_blank_class_omits_attribute() {
    let context = context_with_post_and_user();

    let html = render(&context, &["post"], SummaryOptions::new().class(""));
    assert!(html.starts_with("<div id=\"error_explanation\">"));
}

#[test]
fn test_explicit_object_bypasses_resolution() {
    // nothing bound under the name; the override supplies the object
    let context = RenderContext::new();

    let html = render(
        &context,
        &["post"],
        SummaryOptions::new().object(Some(post_with_error())),
    );
    assert_eq!(
        html,
        "<div id=\"error_explanation\" class=\"error_explanation\">\
         <h2>1 error prohibited this post from being saved</h2>\
         <p>There were problems with the following fields:</p>\
         <ul><li>Author name can't be empty</li></ul></div>"
    );
}

#[test]
fn test_explicit_object_list() {
    let context = RenderContext::new();

    let html = render(
        &context,
        &["user", "post"],
        SummaryOptions::new().objects(vec![user_with_error(), post_with_error()]),
    );
    assert!(html.contains("<h2>2 errors prohibited this user from being saved</h2>"));
    assert!(html.contains("<ul><li>Email can't be empty</li><li>Author name can't be empty</li></ul>"));
}

#[test]
fn test_explicit_nil_object_renders_nothing() {
    let context = context_with_post_and_user();

    assert_eq!(
        render(&context, &["user"], SummaryOptions::new().object(None)),
        ""
    );
}

#[test]
fn test_object_targets_work_without_bindings() {
    let context = RenderContext::new();

    let html = error_messages_for(
        &context,
        &[
            Target::object(user_with_error()),
            Target::object(post_with_error()),
        ],
        &SummaryOptions::new(),
    );
    assert!(html.contains("<h2>2 errors prohibited this user from being saved</h2>"));
}

#[test]
fn test_markup_in_messages_passes_through() {
    let mut errors = FieldErrors::new();
    errors.add("author_name", "can't be <em>empty</em>");
    let context = RenderContext::new();
    context.bind("post", Post { errors }).unwrap();

    let html = render(&context, &["post"], SummaryOptions::new());
    assert!(html.contains("<li>Author name can't be <em>empty</em></li>"));
}

#[test]
fn test_zero_error_object_contributes_nothing_in_a_list() {
    let context = RenderContext::new();
    context.bind_shared("draft", clean_post()).unwrap();
    context.bind_shared("user", user_with_error()).unwrap();

    let html = render(&context, &["draft", "user"], SummaryOptions::new());
    // the clean object still names the summary but adds no messages
    assert!(html.contains("<h2>1 error prohibited this post from being saved</h2>"));
    assert!(html.contains("<ul><li>Email can't be empty</li></ul>"));
}
