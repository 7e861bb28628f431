//! Opt-in escaping for attribute values
//!
//! The serializers in this crate insert attribute values verbatim, so a value
//! containing `"` or a bare `&` yields markup an XML parser rejects. Callers
//! that cannot trust their inputs can run them through [`escape_attr`] before
//! building the element; nothing in this crate calls it implicitly.

use std::borrow::Cow;

const RESERVED: &[char] = &['&', '<', '>', '"', '\''];

/// True when a value contains a character that breaks attribute round-tripping.
#[must_use]
pub fn needs_escaping(value: &str) -> bool {
    value.contains(RESERVED)
}

/// Replace the five XML-reserved characters with their named entities.
///
/// Returns the input borrowed and unchanged when there is nothing to replace.
///
/// # Example
///
/// ```rust
/// use svg_fragment::escape_attr;
///
/// assert_eq!(escape_attr("A & B"), "A &amp; B");
/// assert_eq!(escape_attr("plain"), "plain");
/// ```
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !needs_escaping(value) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
