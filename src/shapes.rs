//! Shape preparers for the common SVG drawing elements
//!
//! Each preparer serializes one element with a fixed tag and a fixed trailing
//! run of geometry attributes. Caller-supplied attributes always come first,
//! the shape's own attributes always come last; that ordering is part of the
//! output contract, not an accident of implementation.

use crate::builder::{check_paired, write_element};
use crate::error::ElementError;

/// Tag name and the fixed order of a shape's own attribute names
struct Shape {
    tag: &'static str,
    attrs: &'static [&'static str],
}

const RECT: Shape = Shape {
    tag: "rect",
    attrs: &["x", "y", "width", "height"],
};

const CIRCLE: Shape = Shape {
    tag: "circle",
    attrs: &["x", "y", "r"],
};

const LINE: Shape = Shape {
    tag: "line",
    attrs: &["x1", "y1", "x2", "y2"],
};

const POLYGON: Shape = Shape {
    tag: "polygon",
    attrs: &["points"],
};

const PATH: Shape = Shape {
    tag: "path",
    attrs: &["d"],
};

/// Pair a shape's attribute names with the matching geometry values
fn known_pairs<'a>(
    shape: &Shape,
    geometry: &'a [&'a str],
) -> impl Iterator<Item = (&'a str, &'a str)> {
    debug_assert_eq!(shape.attrs.len(), geometry.len());
    shape.attrs.iter().copied().zip(geometry.iter().copied())
}

/// Serialize a shape from its geometry values alone
fn serialize(shape: &Shape, geometry: &[&str]) -> String {
    write_element(shape.tag, known_pairs(shape, geometry))
}

/// Serialize a shape with caller attributes ahead of its geometry attributes
fn serialize_with_attrs<N, V>(
    shape: &Shape,
    geometry: &[&str],
    attr_names: &[N],
    attr_values: &[V],
) -> Result<String, ElementError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    check_paired(attr_names.len(), attr_values.len())?;
    let extras = attr_names
        .iter()
        .map(|n| n.as_ref())
        .zip(attr_values.iter().map(|v| v.as_ref()));
    Ok(write_element(
        shape.tag,
        extras.chain(known_pairs(shape, geometry)),
    ))
}

/// Serialize a `<rect/>` from pre-formatted position and size strings.
#[must_use]
pub fn rect(x: &str, y: &str, width: &str, height: &str) -> String {
    serialize(&RECT, &[x, y, width, height])
}

/// Serialize a `<rect/>` with extra attributes ahead of `x`, `y`, `width`, `height`.
///
/// Fails with [`ElementError::AttributeLengthMismatch`] when the two extra
/// slices differ in length; nothing is serialized in that case.
pub fn rect_with_attrs<N, V>(
    x: &str,
    y: &str,
    width: &str,
    height: &str,
    attr_names: &[N],
    attr_values: &[V],
) -> Result<String, ElementError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    serialize_with_attrs(&RECT, &[x, y, width, height], attr_names, attr_values)
}

/// Serialize a `<circle/>` from pre-formatted position and radius strings.
///
/// The position attributes are named `x` and `y`, not `cx` and `cy`; this is
/// part of the output contract.
#[must_use]
pub fn circle(x: &str, y: &str, r: &str) -> String {
    serialize(&CIRCLE, &[x, y, r])
}

/// Serialize a `<circle/>` with extra attributes ahead of `x`, `y`, `r`.
///
/// Fails when `attr_names` and `attr_values` differ in length.
pub fn circle_with_attrs<N, V>(
    x: &str,
    y: &str,
    r: &str,
    attr_names: &[N],
    attr_values: &[V],
) -> Result<String, ElementError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    serialize_with_attrs(&CIRCLE, &[x, y, r], attr_names, attr_values)
}

/// Serialize a `<line/>` from its two pre-formatted endpoints.
#[must_use]
pub fn line(x1: &str, y1: &str, x2: &str, y2: &str) -> String {
    serialize(&LINE, &[x1, y1, x2, y2])
}

/// Serialize a `<line/>` with extra attributes ahead of `x1`, `y1`, `x2`, `y2`.
///
/// Fails when `attr_names` and `attr_values` differ in length.
pub fn line_with_attrs<N, V>(
    x1: &str,
    y1: &str,
    x2: &str,
    y2: &str,
    attr_names: &[N],
    attr_values: &[V],
) -> Result<String, ElementError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    serialize_with_attrs(&LINE, &[x1, y1, x2, y2], attr_names, attr_values)
}

/// Serialize a `<polygon/>` from one pre-formatted vertex list, e.g. `"0,0 10,0 5,10"`.
#[must_use]
pub fn polygon(points: &str) -> String {
    serialize(&POLYGON, &[points])
}

/// Serialize a `<polygon/>` with extra attributes ahead of `points`.
///
/// Fails when `attr_names` and `attr_values` differ in length.
pub fn polygon_with_attrs<N, V>(
    points: &str,
    attr_names: &[N],
    attr_values: &[V],
) -> Result<String, ElementError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    serialize_with_attrs(&POLYGON, &[points], attr_names, attr_values)
}

/// Serialize a `<path/>` from one pre-formatted path data string.
#[must_use]
pub fn path(d: &str) -> String {
    serialize(&PATH, &[d])
}

/// Serialize a `<path/>` with extra attributes ahead of `d`.
///
/// Fails when `attr_names` and `attr_values` differ in length.
pub fn path_with_attrs<N, V>(
    d: &str,
    attr_names: &[N],
    attr_values: &[V],
) -> Result<String, ElementError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    serialize_with_attrs(&PATH, &[d], attr_names, attr_values)
}
