//! Format decoded documents for display (indented text dump).

use crate::value::{Attribute, Value};

/// Render a decoded document as indented `name: value` lines, nested
/// documents one level deeper per container.
pub fn document_to_dump(attributes: &[Attribute], indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let mut lines = Vec::new();
    for attr in attributes {
        match &attr.value {
            Value::Document(nested) => {
                lines.push(format!("{}{}:", pad, attr.name));
                if nested.is_empty() {
                    lines.push(format!("{}  <empty>", pad));
                } else {
                    lines.push(document_to_dump(nested, indent + 1));
                }
            }
            scalar => lines.push(format!("{}{}: {}", pad, attr.name, format_scalar(scalar))),
        }
    }
    lines.join("\n")
}

/// One-line rendering of a scalar value.
pub fn format_scalar(v: &Value) -> String {
    match v {
        Value::Byte(x) => format!("{}", x),
        Value::U32(x) => format!("{}", x),
        Value::U64(x) => format!("{}", x),
        Value::Decimal(x) => format!("{}", x),
        Value::String(x) => format!("\"{}\"", x),
        Value::Time(t) => t.to_rfc3339(),
        Value::Bytes(b) => format!("hex({})", hex_string(b)),
        Value::Document(d) => format!("<document: {} attributes>", d.len()),
    }
}

fn hex_string(b: &[u8]) -> String {
    b.iter()
        .map(|x| format!("{:02x}", x))
        .collect::<Vec<_>>()
        .join(" ")
}
