//! Markup primitives shared by every serializable node.
//!
//! Nodes materialize into an [`Element`] tree that mirrors the target XML
//! one-to-one: qualified names are stored verbatim (`w:sdtPr`), attributes keep
//! insertion order, and text is kept unescaped until it is written. The
//! [`writer`] module flattens such a tree to bytes.

pub mod element;
pub mod error;
pub mod writer;

pub use element::{Attribute, Element, Node};
pub use error::MarkupError;
pub use writer::{WriteOptions, write_element, write_to_string};
