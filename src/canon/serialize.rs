//! Canonical serialization and content equivalence.
//!
//! Canonical form:
//! - no indentation or line breaks between elements
//! - attributes sorted by name, values double-quoted
//! - text trimmed with whitespace runs collapsed; blank text dropped
//! - `<name/>` for an element with neither text nor children
//! - `& < > "` escaped everywhere; tab/newline/CR as char refs inside attributes

use crate::canon::text::{is_encodable, normalize_text};
use crate::error::CanonError;
use crate::tree::{NodePath, TreeNode};

use tracing::trace;

/// Serialize `node` and its subtree to canonical text.
pub fn canonicalize<N: TreeNode>(node: &N) -> Result<String, CanonError> {
    let mut out = String::new();
    write_element(node, &NodePath::root(), &mut out)?;
    trace!(element = node.name(), canonical = out.as_str(), "canonicalized");
    Ok(out)
}

/// True iff both trees serialize to the same canonical text.
pub fn equivalent<A: TreeNode, B: TreeNode>(x: &A, y: &B) -> Result<bool, CanonError> {
    Ok(canonicalize(x)? == canonicalize(y)?)
}

fn write_element<N: TreeNode>(node: &N, path: &NodePath, out: &mut String) -> Result<(), CanonError> {
    out.push('<');
    push_checked(node.name(), path, out)?;

    let mut attrs = node.attributes();
    attrs.sort_by(|a, b| a.0.cmp(b.0));
    for (name, value) in attrs {
        out.push(' ');
        push_checked(name, path, out)?;
        out.push_str("=\"");
        escape(value, true, path, out)?;
        out.push('"');
    }

    let text = node
        .text()
        .map(normalize_text)
        .filter(|t| !t.is_empty());
    let children = node.children();

    if text.is_none() && children.is_empty() {
        out.push_str("/>");
        return Ok(());
    }

    out.push('>');
    if let Some(t) = text {
        escape(&t, false, path, out)?;
    }
    for (i, child) in children.iter().enumerate() {
        write_element(child, &path.child(i as u32), out)?;
    }
    out.push_str("</");
    out.push_str(node.name());
    out.push('>');
    Ok(())
}

fn push_checked(s: &str, path: &NodePath, out: &mut String) -> Result<(), CanonError> {
    if let Some(ch) = s.chars().find(|c| !is_encodable(*c)) {
        return Err(CanonError::UnencodableChar {
            path: path.clone(),
            ch,
        });
    }
    out.push_str(s);
    Ok(())
}

fn escape(s: &str, in_attr: bool, path: &NodePath, out: &mut String) -> Result<(), CanonError> {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' if in_attr => out.push_str("&#9;"),
            '\n' if in_attr => out.push_str("&#10;"),
            '\r' if in_attr => out.push_str("&#13;"),
            c if !is_encodable(c) => {
                return Err(CanonError::UnencodableChar {
                    path: path.clone(),
                    ch: c,
                });
            }
            c => out.push(c),
        }
    }
    Ok(())
}
