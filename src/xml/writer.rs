//! Text rendering for XML element trees

use std::fmt::Write;

use thiserror::Error;

use super::tree::XmlElement;

/// Errors from the underlying text writer
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("xml writer error: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Render an element tree to text. Compact mode emits no whitespace between
/// elements; pretty mode indents nested elements by two spaces. Both render
/// the same tree, so they differ only in whitespace.
pub fn render(element: &XmlElement, pretty: bool) -> Result<String, XmlError> {
    let mut out = String::new();
    write_element(&mut out, element, pretty, 0)?;
    Ok(out)
}

fn write_element(
    out: &mut String,
    element: &XmlElement,
    pretty: bool,
    depth: usize,
) -> Result<(), XmlError> {
    if pretty && depth > 0 {
        out.push('\n');
        for _ in 0..depth {
            out.push_str("  ");
        }
    }

    write!(out, "<{}", element.name)?;
    for (name, value) in &element.attributes {
        write!(out, " {}=\"{}\"", name, escape(value))?;
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return Ok(());
    }

    out.push('>');
    for child in &element.children {
        write_element(out, child, pretty, depth + 1)?;
    }
    if pretty {
        out.push('\n');
        for _ in 0..depth {
            out.push_str("  ");
        }
    }
    write!(out, "</{}>", element.name)?;
    Ok(())
}

/// Escape text for use in attribute values (and element content).
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
