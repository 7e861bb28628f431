//! Serialization of self-closing SVG elements
//!
//! Everything in this crate funnels through [`write_element`]: a tag name and
//! an ordered stream of `(name, value)` pairs become one `<tag .../>` string.

use crate::error::ElementError;

/// Serialize a self-closing element from a tag and two parallel attribute slices.
///
/// `attr_names[i]` pairs with `attr_values[i]`, and pairs appear in the output
/// in input order. The output always has the shape `<tag name="value" .../>`,
/// degenerating to `<tag />` when both slices are empty.
///
/// Values are inserted verbatim, with no escaping. A value containing `"`
/// therefore produces malformed markup; callers that cannot trust their
/// inputs can sanitize them first with [`crate::escape_attr`]. The tag must
/// be non-empty and is not checked against the XML name grammar.
///
/// # Errors
///
/// Returns [`ElementError::AttributeLengthMismatch`] when the two slices
/// differ in length. The check runs before any output is assembled, so no
/// partial string is ever produced.
///
/// # Example
///
/// ```rust
/// use svg_fragment::element;
///
/// let marker = element("marker", &["id", "orient"], &["arrow", "auto"]).unwrap();
/// assert_eq!(marker, r#"<marker id="arrow" orient="auto"/>"#);
/// ```
pub fn element<N, V>(tag: &str, attr_names: &[N], attr_values: &[V]) -> Result<String, ElementError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    check_paired(attr_names.len(), attr_values.len())?;
    let pairs = attr_names
        .iter()
        .map(|n| n.as_ref())
        .zip(attr_values.iter().map(|v| v.as_ref()));
    Ok(write_element(tag, pairs))
}

/// Fail unless an attribute-name count matches its value count
pub(crate) fn check_paired(names: usize, values: usize) -> Result<(), ElementError> {
    if names == values {
        Ok(())
    } else {
        Err(ElementError::length_mismatch(names, values))
    }
}

/// Stream `(name, value)` pairs into the serialized element form.
///
/// The tag is always followed by a single space, which is what makes the
/// zero-attribute output come out as `<tag />`.
pub(crate) fn write_element<'a>(
    tag: &str,
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(tag);
    out.push(' ');
    let mut first = true;
    for (name, value) in pairs {
        if !first {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
        first = false;
    }
    out.push_str("/>");
    out
}
