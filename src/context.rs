//! Ambient name-to-object bindings for the renderers.
//!
//! This module provides the [`RenderContext`] type that maps declared names
//! to error-bearing objects, replacing scope-searching with a plain lookup
//! that has a defined miss behavior.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::bearer::{ErrorBearer, SharedBearer};

/// Type alias for the binding storage map.
type BindingMap = Arc<RwLock<HashMap<String, SharedBearer>>>;

/// A table of name-to-object bindings supplied by the calling rendering
/// context.
///
/// Both renderers resolve named targets through a `RenderContext`. Lookup is
/// an exact, case-sensitive string match; a missing name resolves to `None`
/// and renders as empty output rather than failing.
///
/// # Thread Safety
///
/// The context uses `Arc<RwLock<...>>`:
/// - Rendering only reads, so any number of render calls may run concurrently
/// - Binding takes the write lock and is serialized
///
/// Cloning a context is cheap and shares the same binding table.
///
/// # Example
///
/// ```rust
/// use redink::{ErrorBearer, FieldErrors, RenderContext};
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
/// let context = RenderContext::new();
/// context.bind("post", Post { errors: FieldErrors::new() }).unwrap();
///
/// assert!(context.get("post").is_some());
/// assert!(context.get("missing").is_none());
/// ```
pub struct RenderContext {
    bindings: BindingMap,
}

impl RenderContext {
    /// Creates a new empty context.
    pub fn new() -> Self {
        Self {
            bindings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Binds an object to a name.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::DuplicateBinding` if the name is already bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use redink::{ErrorBearer, FieldErrors, RenderContext};
    /// # struct Post { errors: FieldErrors }
    /// # impl ErrorBearer for Post {
    /// #     fn errors(&self) -> &FieldErrors { &self.errors }
    /// #     fn model_name(&self) -> &str { "post" }
    /// # }
    /// let context = RenderContext::new();
    /// context.bind("post", Post { errors: FieldErrors::new() }).unwrap();
    ///
    /// // Duplicate binding fails
    /// assert!(context.bind("post", Post { errors: FieldErrors::new() }).is_err());
    /// ```
    pub fn bind<B>(&self, name: impl Into<String>, bearer: B) -> Result<(), ContextError>
    where
        B: ErrorBearer + 'static,
    {
        self.bind_shared(name, Arc::new(bearer))
    }

    /// Binds an already-shared object to a name.
    ///
    /// Useful when the same instance should also be passed as an explicit
    /// `object` override elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::DuplicateBinding` if the name is already bound.
    pub fn bind_shared(
        &self,
        name: impl Into<String>,
        bearer: SharedBearer,
    ) -> Result<(), ContextError> {
        let name = name.into();
        let mut bindings = self.bindings.write();

        if bindings.contains_key(&name) {
            return Err(ContextError::DuplicateBinding(name));
        }

        bindings.insert(name, bearer);
        Ok(())
    }

    /// Retrieves the object bound to a name.
    ///
    /// Returns `None` if the name has no binding. Lookup is exact and
    /// case-sensitive.
    pub fn get(&self, name: &str) -> Option<SharedBearer> {
        self.bindings.read().get(name).cloned()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RenderContext {
    fn clone(&self) -> Self {
        Self {
            bindings: Arc::clone(&self.bindings),
        }
    }
}

/// Errors that can occur when declaring bindings.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// Attempted to bind a name that is already bound.
    #[error("binding '{0}' already declared")]
    DuplicateBinding(String),
}
