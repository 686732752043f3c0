//! Arithmetic library: adders and comparators

use crate::attr::{AttrDescriptor, AttrType, AttrValue, AttributeSet};
use crate::catalog::factory::ComponentFactory;
use crate::geom::{Bounds, PortSpec};

use super::width_attr;

pub(super) fn factories() -> Vec<Box<dyn ComponentFactory>> {
    vec![Box::new(Adder), Box::new(Comparator)]
}

/// Two-operand adder with carry in and carry out.
pub struct Adder;

impl ComponentFactory for Adder {
    fn name(&self) -> &str {
        "Adder"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![width_attr(8)]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let width = attrs.width("width").unwrap_or(8);
        vec![
            PortSpec::input(-40, -10).with_width(width).with_tooltip("input A"),
            PortSpec::input(-40, 10).with_width(width).with_tooltip("input B"),
            PortSpec::output(0, 0).with_width(width).with_tooltip("sum"),
            PortSpec::input(-20, -20).with_tooltip("carry in"),
            PortSpec::output(-20, 20).with_tooltip("carry out"),
        ]
    }

    fn offset_bounds(&self, _attrs: &AttributeSet) -> Bounds {
        Bounds::new(-40, -20, 40, 40)
    }
}

/// Two-operand magnitude comparator.
pub struct Comparator;

impl ComponentFactory for Comparator {
    fn name(&self) -> &str {
        "Comparator"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            width_attr(8),
            AttrDescriptor::new(
                "mode",
                "numeric type",
                AttrType::Tokens {
                    tokens: &["unsigned", "signed"],
                },
                AttrValue::Token("unsigned"),
            ),
        ]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let width = attrs.width("width").unwrap_or(8);
        vec![
            PortSpec::input(-40, -10).with_width(width).with_tooltip("input A"),
            PortSpec::input(-40, 10).with_width(width).with_tooltip("input B"),
            PortSpec::output(0, -10).with_tooltip("greater"),
            PortSpec::output(0, 0).with_tooltip("equal"),
            PortSpec::output(0, 10).with_tooltip("less"),
        ]
    }

    fn offset_bounds(&self, _attrs: &AttributeSet) -> Bounds {
        Bounds::new(-40, -20, 40, 40)
    }
}
