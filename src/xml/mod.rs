//! Canonical XML serialization for component instances
//!
//! An in-memory element tree is built first; compact and pretty text
//! rendering are separate passes over the same tree.

pub mod component;
pub mod tree;
pub mod writer;

pub use component::component_to_element;
pub use tree::XmlElement;
pub use writer::{render, XmlError};
