//! Compact XML rendering of JSON response values.
//!
//! Objects become nested elements named after their keys, arrays repeat the
//! element once per item, and `null` becomes an empty element. The whole
//! document is wrapped in a single `<root>` element.

use serde_json::Value;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const ROOT_ELEMENT: &str = "root";

/// Render `value` as a complete XML document.
pub fn render_document(value: &Value) -> String {
    let mut out = String::from(DECLARATION);
    write_element(&mut out, ROOT_ELEMENT, value);
    out
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                write_element(out, name, item);
            }
        }
        Value::Null => {
            out.push('<');
            out.push_str(name);
            out.push_str("/>");
        }
        Value::Object(map) => {
            open(out, name);
            for (key, child) in map {
                write_element(out, key, child);
            }
            close(out, name);
        }
        Value::Bool(b) => write_text(out, name, &b.to_string()),
        Value::Number(n) => write_text(out, name, &n.to_string()),
        Value::String(s) => write_text(out, name, s),
    }
}

fn write_text(out: &mut String, name: &str, text: &str) {
    open(out, name);
    out.push_str(&escape(text));
    close(out, name);
}

fn open(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}

fn close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Escape text content for embedding between tags.
/// Characters outside the XML 1.0 `Char` production are dropped.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars().filter(|&ch| is_xml_char(ch)) {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
