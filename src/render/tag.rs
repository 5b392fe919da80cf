//! Minimal content-tag emission.
//!
//! Both renderers build their fragments through [`content_tag`]. Attribute
//! order follows the supplied slice and nothing is escaped: message content,
//! surrounding text, and attribute values all pass through verbatim, which is
//! the documented contract for this layer.

use std::fmt::Write;

/// Emits `<name attrs..>body</name>`.
///
/// Attributes are written in slice order as `key="value"` pairs. An empty
/// attribute slice produces a bare opening tag.
pub(crate) fn content_tag(name: &str, attrs: &[(&str, &str)], body: &str) -> String {
    let mut out = String::with_capacity(body.len() + name.len() * 2 + 5);
    out.push('<');
    out.push_str(name);
    for (key, value) in attrs {
        // write! into a String cannot fail
        let _ = write!(out, " {}=\"{}\"", key, value);
    }
    out.push('>');
    out.push_str(body);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}
