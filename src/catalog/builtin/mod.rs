//! Built-in component libraries
//!
//! Load order is fixed and is part of the serialized format: the position
//! of a library here becomes the `lib` index in emitted elements.

mod arith;
mod gates;
mod wiring;

use crate::attr::{AttrDescriptor, AttrType, AttrValue, AttributeSet};
use crate::geom::Direction;

use super::Library;

/// All built-in libraries, in load order.
pub fn libraries() -> Vec<Library> {
    vec![
        Library::new("Wiring", wiring::factories()),
        Library::new("Gates", gates::factories()),
        Library::new("Arithmetic", arith::factories()),
    ]
}

/// Shared `facing` attribute.
pub(crate) fn facing_attr(default: &'static str) -> AttrDescriptor {
    AttrDescriptor::new(
        "facing",
        "facing",
        AttrType::Tokens {
            tokens: &Direction::TOKENS,
        },
        AttrValue::Token(default),
    )
}

/// Shared `width` (data bits) attribute.
pub(crate) fn width_attr(default: u8) -> AttrDescriptor {
    AttrDescriptor::new(
        "width",
        "data bits",
        AttrType::WidthBits { max: 64 },
        AttrValue::Width(default),
    )
}

/// Shared `label` attribute.
pub(crate) fn label_attr() -> AttrDescriptor {
    AttrDescriptor::new("label", "label", AttrType::Text, AttrValue::Text(String::new()))
}

/// Resolved facing of an instance; east when the factory has no facing.
pub(crate) fn facing_of(attrs: &AttributeSet) -> Direction {
    attrs
        .token("facing")
        .and_then(Direction::from_token)
        .unwrap_or(Direction::East)
}
