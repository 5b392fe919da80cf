//! Per-field validation message storage.
//!
//! This module provides [`FieldErrors`], the ordered collection of validation
//! messages that an [`ErrorBearer`](crate::ErrorBearer) exposes to the
//! renderers.

use indexmap::IndexMap;

/// An ordered collection of validation messages keyed by field name.
///
/// `FieldErrors` preserves insertion order: the summary renderer lists
/// messages in the order fields were added, then in the order messages were
/// added within each field. Looking up a field with no messages yields an
/// empty slice rather than an error.
///
/// Messages are stored without their field prefix ("can't be empty");
/// [`full_messages`](FieldErrors::full_messages) derives the user-facing form
/// ("Author name can't be empty") by prefixing each message with the
/// humanized field name.
///
/// # Example
///
/// ```rust
/// use redink::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.add("author_name", "can't be empty");
/// errors.add("body", "is too short");
///
/// assert_eq!(errors.count(), 2);
/// assert_eq!(errors.on("author_name"), ["can't be empty"]);
/// assert_eq!(
///     errors.full_messages(),
///     ["Author name can't be empty", "Body is too short"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    entries: IndexMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for the given field.
    ///
    /// Fields keep the order in which they first received a message;
    /// messages within a field keep the order they were added.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns the total number of messages across all fields.
    pub fn count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns true if no field has any message.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Returns the messages recorded for a field.
    ///
    /// Lookup is exact and case-sensitive; an unknown field yields an empty
    /// slice.
    pub fn on(&self, field: &str) -> &[String] {
        self.entries.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns every message prefixed with its humanized field name.
    ///
    /// Ordering follows field insertion order, then message order within the
    /// field. A field named `author_name` with the message "can't be empty"
    /// yields "Author name can't be empty".
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|(field, messages)| {
                let prefix = humanize(field);
                messages
                    .iter()
                    .map(move |message| format!("{} {}", prefix, message))
            })
            .collect()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Converts a field name into its human-readable form: underscores become
/// spaces and the first character is uppercased.
fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
