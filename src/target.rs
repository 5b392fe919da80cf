//! Render-target references and their resolution.
//!
//! This module provides the [`Target`] type both renderers accept: either a
//! declared name to look up in the calling context, or an explicit object
//! reference used as-is.

use std::sync::Arc;

use crate::bearer::SharedBearer;
use crate::context::RenderContext;

/// A reference to the object a render call operates on.
///
/// A `Target` is either a name resolved through the ambient
/// [`RenderContext`], or an object passed directly. Resolution never fails:
/// a name with no binding resolves to `None`, which the renderers turn into
/// empty output.
///
/// # Example
///
/// ```rust
/// use redink::{RenderContext, Target};
///
/// let context = RenderContext::new();
///
/// let by_name = Target::name("post");
/// assert!(by_name.resolve(&context).is_none());
/// ```
#[derive(Clone)]
pub enum Target {
    /// A declared name, looked up in the rendering context.
    Name(String),
    /// An explicit object reference, used unchanged.
    Object(SharedBearer),
}

impl Target {
    /// Creates a target that resolves through the context by name.
    pub fn name(name: impl Into<String>) -> Self {
        Target::Name(name.into())
    }

    /// Creates a target that is already an object.
    pub fn object(bearer: SharedBearer) -> Self {
        Target::Object(bearer)
    }

    /// Resolves this target against a context.
    ///
    /// An explicit object is returned unchanged; a name is looked up and a
    /// miss yields `None`.
    pub fn resolve(&self, context: &RenderContext) -> Option<SharedBearer> {
        match self {
            Target::Name(name) => context.get(name),
            Target::Object(bearer) => Some(Arc::clone(bearer)),
        }
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Target::name(name)
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Target::Name(name)
    }
}

impl From<SharedBearer> for Target {
    fn from(bearer: SharedBearer) -> Self {
        Target::Object(bearer)
    }
}
