//! The capability trait the renderers consume.
//!
//! This module provides the [`ErrorBearer`] trait that model types implement
//! to make their validation errors renderable, along with the optional
//! [`Column`] metadata descriptor.

use std::sync::Arc;

use crate::error::FieldErrors;

/// A shared, type-erased error-bearing object.
///
/// Both the binding context and the explicit-object render options hold
/// bearers behind this alias so one model instance can back several render
/// calls.
pub type SharedBearer = Arc<dyn ErrorBearer>;

/// A model value whose validation errors can be rendered.
///
/// `ErrorBearer` is the explicit interface between the model layer and the
/// renderers: an errors collection, a human-readable type name for summary
/// phrasing, and optional per-field column metadata. The `Send + Sync`
/// bounds allow bearers to be shared across rendering contexts as
/// `Arc<dyn ErrorBearer>`.
///
/// # Example
///
/// ```rust
/// use redink::{ErrorBearer, FieldErrors};
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
/// ```
pub trait ErrorBearer: Send + Sync {
    /// The accumulated validation errors for this object.
    fn errors(&self) -> &FieldErrors;

    /// The human-readable type name used in summary phrasing ("post", "user").
    fn model_name(&self) -> &str;

    /// Column metadata for a field, if the model exposes any.
    ///
    /// The default implementation reports no metadata, which renders every
    /// field through the plain formatter.
    fn column_for_attribute(&self, field: &str) -> Option<Column> {
        let _ = field;
        None
    }
}

/// The attribute type of a model column.
///
/// Only the [`Text`](ColumnKind::Text) / non-`Text` distinction is exercised
/// by the field renderer; the remaining kinds exist so models can describe
/// their schema faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Single-line string attribute.
    String,
    /// Multi-line text attribute.
    Text,
    /// Integer attribute.
    Integer,
    /// Floating-point attribute.
    Float,
    /// Boolean attribute.
    Boolean,
    /// Calendar date attribute.
    Date,
    /// Time-of-day attribute.
    Time,
    /// Combined date and time attribute.
    DateTime,
}

/// Metadata describing one model column.
///
/// A `Column` pairs an attribute type with the column's storage name and its
/// human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The attribute type of the column.
    pub kind: ColumnKind,
    /// The storage name of the column ("author_name").
    pub name: String,
    /// The human-readable label ("Author name").
    pub human_name: String,
}

impl Column {
    /// Creates a new column descriptor.
    pub fn new(kind: ColumnKind, name: impl Into<String>, human_name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            human_name: human_name.into(),
        }
    }
}
