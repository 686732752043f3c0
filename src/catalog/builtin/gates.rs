//! Gates library: the basic logic gates

use crate::attr::{AttrDescriptor, AttrType, AttrValue, AttributeSet};
use crate::catalog::factory::ComponentFactory;
use crate::geom::{Bounds, PortSpec};

use super::{facing_attr, facing_of, label_attr, width_attr};

pub(super) fn factories() -> Vec<Box<dyn ComponentFactory>> {
    vec![
        Box::new(GateFactory::new(GateKind::And)),
        Box::new(GateFactory::new(GateKind::Or)),
        Box::new(GateFactory::new(GateKind::Nand)),
        Box::new(GateFactory::new(GateKind::Nor)),
        Box::new(GateFactory::new(GateKind::Xor)),
        Box::new(GateFactory::new(GateKind::Xnor)),
        Box::new(NotGate),
        Box::new(Buffer),
    ]
}

#[derive(Debug, Clone, Copy)]
pub enum GateKind {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl GateKind {
    fn name(&self) -> &'static str {
        match self {
            GateKind::And => "AND Gate",
            GateKind::Or => "OR Gate",
            GateKind::Nand => "NAND Gate",
            GateKind::Nor => "NOR Gate",
            GateKind::Xor => "XOR Gate",
            GateKind::Xnor => "XNOR Gate",
        }
    }
}

/// Multi-input gate. The anchor sits on the output pin; inputs line up on
/// the opposite side at a 20-unit pitch centered on the anchor row.
pub struct GateFactory {
    kind: GateKind,
}

impl GateFactory {
    pub fn new(kind: GateKind) -> Self {
        Self { kind }
    }

    fn size(attrs: &AttributeSet) -> i32 {
        attrs.int("size").unwrap_or(50) as i32
    }

    fn inputs(attrs: &AttributeSet) -> i32 {
        attrs.int("inputs").unwrap_or(5) as i32
    }

    /// Half-height of the shape: the body half-size, grown when the input
    /// row is taller than the body.
    fn half_height(size: i32, inputs: i32) -> i32 {
        (size / 2).max(10 * (inputs - 1) + 10)
    }
}

impl ComponentFactory for GateFactory {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            facing_attr("east"),
            width_attr(1),
            AttrDescriptor::new(
                "size",
                "gate size",
                AttrType::IntChoice {
                    choices: &[30, 50, 70],
                },
                AttrValue::Int(50),
            ),
            AttrDescriptor::new(
                "inputs",
                "number of inputs",
                AttrType::Int { min: 2, max: 32 },
                AttrValue::Int(5),
            ),
            label_attr(),
        ]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let facing = facing_of(attrs);
        let width = attrs.width("width").unwrap_or(1);
        let size = Self::size(attrs);
        let inputs = Self::inputs(attrs);

        let mut ports = vec![PortSpec::output(0, 0).with_width(width).with_tooltip("output")];
        for i in 0..inputs {
            let dy = 20 * i - 10 * (inputs - 1);
            let (dx, dy) = facing.rotate(-size, dy);
            ports.push(
                PortSpec::input(dx, dy)
                    .with_width(width)
                    .with_tooltip(format!("input {}", i + 1)),
            );
        }
        ports
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        let size = Self::size(attrs);
        let half = Self::half_height(size, Self::inputs(attrs));
        Bounds::new(-size, -half, size, 2 * half).rotate(facing_of(attrs))
    }
}

/// Single-input inverter.
pub struct NotGate;

impl NotGate {
    fn size(attrs: &AttributeSet) -> i32 {
        attrs.int("size").unwrap_or(30) as i32
    }
}

impl ComponentFactory for NotGate {
    fn name(&self) -> &str {
        "NOT Gate"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            facing_attr("east"),
            width_attr(1),
            AttrDescriptor::new(
                "size",
                "gate size",
                AttrType::IntChoice { choices: &[20, 30] },
                AttrValue::Int(30),
            ),
            label_attr(),
        ]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let facing = facing_of(attrs);
        let width = attrs.width("width").unwrap_or(1);
        let (dx, dy) = facing.rotate(-Self::size(attrs), 0);
        vec![
            PortSpec::output(0, 0).with_width(width).with_tooltip("output"),
            PortSpec::input(dx, dy).with_width(width).with_tooltip("input"),
        ]
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        let size = Self::size(attrs);
        Bounds::new(-size, -10, size, 20).rotate(facing_of(attrs))
    }
}

/// Single-input driver.
pub struct Buffer;

impl ComponentFactory for Buffer {
    fn name(&self) -> &str {
        "Buffer"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![facing_attr("east"), width_attr(1), label_attr()]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let facing = facing_of(attrs);
        let width = attrs.width("width").unwrap_or(1);
        let (dx, dy) = facing.rotate(-20, 0);
        vec![
            PortSpec::output(0, 0).with_width(width).with_tooltip("output"),
            PortSpec::input(dx, dy).with_width(width).with_tooltip("input"),
        ]
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        Bounds::new(-20, -10, 20, 20).rotate(facing_of(attrs))
    }
}
