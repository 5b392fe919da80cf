//! Error-collection types consumed by the renderers.
//!
//! This module provides [`FieldErrors`], the ordered per-field message store
//! that every error-bearing object exposes.

mod field_errors;

pub use field_errors::FieldErrors;
