//! Minimal safe-markup building
//!
//! Wrapper and control markup is assembled through these helpers instead of
//! raw concatenation, so every attribute value and text node goes through
//! output escaping exactly once. Attributes are single-quoted;
//! `encode_quoted_attribute` escapes both quote styles.

use html_escape::{encode_quoted_attribute, encode_text};

/// Append ` name='value'` with the value attribute-escaped.
pub(crate) fn push_attr(buf: &mut String, name: &str, value: &str) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("='");
    buf.push_str(&encode_quoted_attribute(value));
    buf.push('\'');
}

/// Append an opening tag with the given attributes.
pub(crate) fn push_open_tag(buf: &mut String, tag: &str, attrs: &[(&str, &str)]) {
    buf.push('<');
    buf.push_str(tag);
    for (name, value) in attrs {
        push_attr(buf, name, value);
    }
    buf.push('>');
}

/// Append a self-closing tag with the given attributes.
pub(crate) fn push_void_tag(buf: &mut String, tag: &str, attrs: &[(&str, &str)]) {
    buf.push('<');
    buf.push_str(tag);
    for (name, value) in attrs {
        push_attr(buf, name, value);
    }
    buf.push_str(" />");
}

/// Append a complete element with escaped text content.
pub(crate) fn push_element(buf: &mut String, tag: &str, attrs: &[(&str, &str)], text: &str) {
    push_open_tag(buf, tag, attrs);
    buf.push_str(&encode_text(text));
    buf.push_str("</");
    buf.push_str(tag);
    buf.push('>');
}
