//! Labelled document tree (registry XML) and text extraction over it.

pub mod element;
pub mod itertext;
pub mod xml;

pub use element::{Element, Label};
pub use itertext::{IterText, itertext};
pub use xml::parse_xml;
