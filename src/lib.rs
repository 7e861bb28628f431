//! svg-fragment - self-closing SVG element assembly from pre-formatted strings
//!
//! This library builds individual SVG element fragments (`<rect/>`,
//! `<circle/>`, `<line/>`, `<polygon/>`, `<path/>`, or any custom tag) for
//! callers that compose their own `<svg>` documents, such as generative
//! pipelines synthesizing image metadata. Every coordinate and attribute
//! value arrives as a pre-formatted string: the library does no numeric
//! formatting, no validation, and no escaping.
//!
//! Caller-supplied attributes are emitted first, in caller order, followed by
//! the shape's own attributes in a fixed order. Attribute names and values
//! travel as two parallel slices; serialization fails if their lengths differ.
//!
//! # Example
//!
//! ```rust
//! use svg_fragment::{circle_with_attrs, rect};
//!
//! let backdrop = rect("0", "0", "100", "100");
//! assert_eq!(backdrop, r#"<rect x="0" y="0" width="100" height="100"/>"#);
//!
//! let dot = circle_with_attrs("50", "50", "8", &["fill"], &["gold"]).unwrap();
//! assert_eq!(dot, r#"<circle fill="gold" x="50" y="50" r="8"/>"#);
//!
//! let image = format!(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg">{}{}</svg>"#,
//!     backdrop, dot
//! );
//! assert!(image.contains("<circle"));
//! ```

pub mod builder;
pub mod error;
pub mod escape;
pub mod shapes;

pub use builder::element;
pub use error::ElementError;
pub use escape::{escape_attr, needs_escaping};
pub use shapes::{
    circle, circle_with_attrs, line, line_with_attrs, path, path_with_attrs, polygon,
    polygon_with_attrs, rect, rect_with_attrs,
};
