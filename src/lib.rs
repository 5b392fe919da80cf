//! # Redink
//!
//! Renders accumulated validation errors as HTML feedback fragments: an
//! aggregate summary block listing every error across one or more objects,
//! and an inline per-field wrapper for a single message.
//!
//! ## Overview
//!
//! Redink sits between a model layer that has already run validation and the
//! templates that display the outcome. It does not validate anything itself;
//! it resolves object references, aggregates the errors they carry, and
//! formats two fragment shapes with stable ordering and exact default text.
//! Anything that cannot be resolved, or has no errors, renders as the empty
//! string rather than failing.
//!
//! ## Core Types
//!
//! - [`FieldErrors`]: ordered per-field store of validation messages
//! - [`ErrorBearer`]: the capability trait model types implement to be renderable
//! - [`RenderContext`]: ambient name-to-object bindings supplied by the caller
//! - [`Target`]: a name-or-object reference accepted by both renderers
//! - [`error_messages_for`] / [`SummaryOptions`]: the summary block
//! - [`error_message_on`] / [`FieldOptions`]: the inline field wrapper
//!
//! ## Example
//!
//! ```rust
//! use redink::{
//!     error_messages_for, ErrorBearer, FieldErrors, RenderContext, SummaryOptions, Target,
//! };
//!
//! struct Post {
//!     errors: FieldErrors,
//! }
//!
//! impl ErrorBearer for Post {
//!     fn errors(&self) -> &FieldErrors {
//!         &self.errors
//!     }
//!
//!     fn model_name(&self) -> &str {
//!         "post"
//!     }
//! }
//!
//! let mut errors = FieldErrors::new();
//! errors.add("author_name", "can't be empty");
//!
//! let context = RenderContext::new();
//! context.bind("post", Post { errors }).unwrap();
//!
//! let html = error_messages_for(&context, &[Target::name("post")], &SummaryOptions::new());
//! assert_eq!(
//!     html,
//!     "<div id=\"error_explanation\" class=\"error_explanation\">\
//!      <h2>1 error prohibited this post from being saved</h2>\
//!      <p>There were problems with the following fields:</p>\
//!      <ul><li>Author name can't be empty</li></ul></div>"
//! );
//! ```

pub mod bearer;
pub mod context;
pub mod error;
pub mod render;
pub mod target;

pub use bearer::{Column, ColumnKind, ErrorBearer, SharedBearer};
pub use context::{ContextError, RenderContext};
pub use error::FieldErrors;
pub use render::{error_message_on, error_messages_for, FieldOptions, SummaryOptions};
pub use target::Target;
