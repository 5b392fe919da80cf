//! HTML fragment rendering.
//!
//! This module provides the two renderers: the aggregate summary block
//! ([`error_messages_for`]) and the inline per-field wrapper
//! ([`error_message_on`]). Both resolve their targets the same way and both
//! degrade to the empty string when there is nothing to show.
//!
//! Output is deliberately unescaped: error messages may carry markup from
//! the model layer, and the fragments are emitted byte-for-byte as templates
//! expect them.

mod field;
mod summary;
mod tag;

pub use field::{error_message_on, FieldOptions};
pub use summary::{error_messages_for, SummaryOptions};
