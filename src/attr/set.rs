//! Attribute descriptors and ordered attribute sets

use super::value::{AttrType, AttrValue};

/// Declares one attribute of a component factory: its case-insensitive
/// name, display label, value strategy, default, and whether it is hidden
/// from listings and serialized output.
#[derive(Debug, Clone)]
pub struct AttrDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub ty: AttrType,
    pub default: AttrValue,
    pub hidden: bool,
}

impl AttrDescriptor {
    pub fn new(name: &'static str, label: &'static str, ty: AttrType, default: AttrValue) -> Self {
        Self {
            name,
            label,
            ty,
            default,
            hidden: false,
        }
    }

    /// Mark this attribute as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// One attribute with its current value.
#[derive(Debug, Clone)]
pub struct AttrEntry {
    pub descriptor: AttrDescriptor,
    pub value: AttrValue,
}

impl AttrEntry {
    /// Whether the current value still equals the factory default.
    pub fn is_default(&self) -> bool {
        self.value == self.descriptor.default
    }
}

/// An ordered mapping from descriptor to current value. Insertion order is
/// the factory's declaration order and is preserved for serialization.
/// Cloning yields an independent set, so resolved overrides never touch
/// the factory defaults.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    entries: Vec<AttrEntry>,
}

impl AttributeSet {
    /// Build a set holding every descriptor at its default value.
    pub fn from_descriptors(descriptors: Vec<AttrDescriptor>) -> Self {
        let entries = descriptors
            .into_iter()
            .map(|descriptor| AttrEntry {
                value: descriptor.default.clone(),
                descriptor,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AttrEntry> {
        self.entries.iter()
    }

    /// Case-insensitive lookup of an entry position.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.descriptor.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive lookup of an entry.
    pub fn entry(&self, name: &str) -> Option<&AttrEntry> {
        self.position(name).map(|i| &self.entries[i])
    }

    /// Entry at a known position.
    pub fn entry_at(&self, index: usize) -> &AttrEntry {
        &self.entries[index]
    }

    /// Current value of an attribute, if declared.
    pub fn value(&self, name: &str) -> Option<&AttrValue> {
        self.entry(name).map(|e| &e.value)
    }

    /// Replace the value at a known position.
    pub fn set_at(&mut self, index: usize, value: AttrValue) {
        self.entries[index].value = value;
    }

    /// Convenience accessor for integer-valued attributes.
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.value(name) {
            Some(AttrValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Convenience accessor for token-valued attributes.
    pub fn token(&self, name: &str) -> Option<&'static str> {
        match self.value(name) {
            Some(AttrValue::Token(t)) => Some(t),
            _ => None,
        }
    }

    /// Convenience accessor for width-valued attributes.
    pub fn width(&self, name: &str) -> Option<u8> {
        match self.value(name) {
            Some(AttrValue::Width(w)) => Some(*w),
            _ => None,
        }
    }
}
