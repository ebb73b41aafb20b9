//! Identifier sanitization for setting and grouping names
//!
//! Every setting key and UI grouping id in this crate is derived from a
//! caller-supplied label through [`sanitize_name`]. The same function runs at
//! registration time and at render time, so the two sides always agree on the
//! generated keys.

/// Normalize an arbitrary label into a safe identifier.
///
/// Applies slugging (lowercase, trim, collapse whitespace and punctuation
/// runs into single separators, strip everything unsafe in an identifier or
/// URL path segment), then replaces every hyphen with an underscore.
///
/// Total and idempotent: no input fails, degenerate input yields an empty
/// string, and `sanitize_name(sanitize_name(x)) == sanitize_name(x)`.
///
/// # Examples
///
/// ```
/// use parallax_backgrounds::sanitize::sanitize_name;
///
/// assert_eq!(sanitize_name("Hero Section"), "hero_section");
/// assert_eq!(sanitize_name("promo--banner"), "promo_banner");
/// ```
pub fn sanitize_name(name: &str) -> String {
    slug(name).replace('-', "_")
}

/// Slug a label: lowercase ASCII alphanumerics and underscores survive,
/// whitespace/punctuation runs collapse to a single hyphen, anything else is
/// dropped. Leading and trailing separators are trimmed.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push('_');
        } else if ch.is_whitespace() || ch.is_ascii_punctuation() {
            pending_sep = true;
        }
        // Everything else (control chars, non-ASCII) is stripped.
    }

    out
}

/// Validate a hex color value the way the platform's color setting does.
///
/// Accepts the empty string (an unset setting), `#rgb`, and `#rrggbb` with
/// case-insensitive hex digits. Anything else is rejected with `None`.
pub fn sanitize_hex_color(color: &str) -> Option<String> {
    if color.is_empty() {
        return Some(String::new());
    }

    let digits = color.strip_prefix('#')?;
    if (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(color.to_string())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
