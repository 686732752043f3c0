//! Wiring library: pins, probes, tunnels, clocks, constants, splitters

use crate::attr::{AttrDescriptor, AttrType, AttrValue, AttributeSet};
use crate::catalog::factory::ComponentFactory;
use crate::geom::{Bounds, PortSpec};

use super::{facing_attr, facing_of, label_attr, width_attr};

pub(super) fn factories() -> Vec<Box<dyn ComponentFactory>> {
    vec![
        Box::new(Pin),
        Box::new(Probe),
        Box::new(Tunnel),
        Box::new(Clock),
        Box::new(Constant),
        Box::new(Splitter),
    ]
}

fn rotated_port(attrs: &AttributeSet, spec: PortSpec) -> PortSpec {
    let (dx, dy) = facing_of(attrs).rotate(spec.dx, spec.dy);
    PortSpec { dx, dy, ..spec }
}

fn rotated_bounds(attrs: &AttributeSet, base: Bounds) -> Bounds {
    base.rotate(facing_of(attrs))
}

/// A circuit's connection to the outside world.
pub struct Pin;

impl ComponentFactory for Pin {
    fn name(&self) -> &str {
        "Pin"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            facing_attr("east"),
            AttrDescriptor::new(
                "type",
                "pin type",
                AttrType::Tokens {
                    tokens: &["input", "output"],
                },
                AttrValue::Token("input"),
            ),
            width_attr(1),
            label_attr(),
            // Display radix is editor-local state; kept out of listings
            // and serialized output.
            AttrDescriptor::new(
                "radix",
                "radix",
                AttrType::Tokens {
                    tokens: &["binary", "decimal", "hexadecimal"],
                },
                AttrValue::Token("binary"),
            )
            .hidden(),
            AttrDescriptor::new(
                "appearance",
                "appearance",
                AttrType::Tokens {
                    tokens: &["classic", "evolution"],
                },
                AttrValue::Token("evolution"),
            ),
        ]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let width = attrs.width("width").unwrap_or(1);
        let port = match attrs.token("type") {
            Some("output") => PortSpec::output(0, 0),
            _ => PortSpec::input(0, 0),
        };
        vec![port.with_width(width)]
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        rotated_bounds(attrs, Bounds::new(-20, -10, 20, 20))
    }
}

/// Read-only display of the value on a wire.
pub struct Probe;

impl ComponentFactory for Probe {
    fn name(&self) -> &str {
        "Probe"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            facing_attr("west"),
            AttrDescriptor::new(
                "radix",
                "radix",
                AttrType::Tokens {
                    tokens: &["binary", "decimal", "hexadecimal"],
                },
                AttrValue::Token("binary"),
            ),
            label_attr(),
        ]
    }

    fn ports(&self, _attrs: &AttributeSet) -> Vec<PortSpec> {
        vec![PortSpec::input(0, 0)]
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        rotated_bounds(attrs, Bounds::new(-20, -10, 20, 20))
    }
}

/// Named wire alias; carries its signal in both directions.
pub struct Tunnel;

impl ComponentFactory for Tunnel {
    fn name(&self) -> &str {
        "Tunnel"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![facing_attr("west"), width_attr(1), label_attr()]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let width = attrs.width("width").unwrap_or(1);
        vec![PortSpec::inout(0, 0).with_width(width)]
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        rotated_bounds(attrs, Bounds::new(-30, -10, 30, 20))
    }
}

/// Free-running clock source.
pub struct Clock;

impl ComponentFactory for Clock {
    fn name(&self) -> &str {
        "Clock"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            facing_attr("east"),
            AttrDescriptor::new(
                "high",
                "high duration",
                AttrType::Int { min: 1, max: 4096 },
                AttrValue::Int(1),
            ),
            AttrDescriptor::new(
                "low",
                "low duration",
                AttrType::Int { min: 1, max: 4096 },
                AttrValue::Int(1),
            ),
            label_attr(),
        ]
    }

    fn ports(&self, _attrs: &AttributeSet) -> Vec<PortSpec> {
        vec![PortSpec::output(0, 0)]
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        rotated_bounds(attrs, Bounds::new(-20, -10, 20, 20))
    }
}

/// Fixed value driven onto a wire.
pub struct Constant;

impl ComponentFactory for Constant {
    fn name(&self) -> &str {
        "Constant"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            facing_attr("east"),
            width_attr(1),
            AttrDescriptor::new("value", "value", AttrType::Hex, AttrValue::Hex(0x1)),
        ]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let width = attrs.width("width").unwrap_or(1);
        vec![PortSpec::output(0, 0).with_width(width)]
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        rotated_bounds(attrs, Bounds::new(-10, -10, 10, 20))
    }
}

/// Splits a bus into narrower ends (and joins them back).
pub struct Splitter;

impl Splitter {
    fn fanout(attrs: &AttributeSet) -> i32 {
        attrs.int("fanout").unwrap_or(2) as i32
    }

    fn incoming(attrs: &AttributeSet) -> u8 {
        attrs.width("incoming").unwrap_or(2)
    }

    /// Bit count per split end: an even share of the incoming width, with
    /// the remainder going to the earliest ends.
    fn end_widths(incoming: u8, fanout: i32) -> Vec<u8> {
        let fanout = fanout as u8;
        let base = incoming / fanout;
        let remainder = incoming % fanout;
        (0..fanout)
            .map(|i| base + u8::from(i < remainder))
            .collect()
    }

    fn end_tooltip(first_bit: u8, width: u8) -> String {
        match width {
            0 => "no bits".to_string(),
            1 => format!("bit {}", first_bit),
            _ => format!("bits {} to {}", first_bit, first_bit + width - 1),
        }
    }
}

impl ComponentFactory for Splitter {
    fn name(&self) -> &str {
        "Splitter"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            facing_attr("east"),
            AttrDescriptor::new(
                "fanout",
                "fan out",
                AttrType::Int { min: 2, max: 32 },
                AttrValue::Int(2),
            ),
            AttrDescriptor::new(
                "incoming",
                "bit width in",
                AttrType::WidthBits { max: 64 },
                AttrValue::Width(2),
            ),
        ]
    }

    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
        let fanout = Self::fanout(attrs);
        let incoming = Self::incoming(attrs);
        let widths = Self::end_widths(incoming, fanout);

        let mut ports = vec![PortSpec::inout(0, 0)
            .with_width(incoming)
            .with_tooltip("combined")];
        let mut first_bit = 0u8;
        for (i, width) in widths.into_iter().enumerate() {
            let spec = PortSpec::inout(20, -10 * (fanout - i as i32))
                .with_width(width)
                .with_tooltip(Self::end_tooltip(first_bit, width));
            ports.push(rotated_port(attrs, spec));
            first_bit += width;
        }
        ports
    }

    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds {
        let fanout = Self::fanout(attrs);
        rotated_bounds(attrs, Bounds::new(0, -10 * fanout, 20, 10 * fanout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Location;

    fn resolved(factory: &dyn ComponentFactory, overrides: &[&str]) -> AttributeSet {
        let tokens: Vec<String> = overrides.iter().map(|s| s.to_string()).collect();
        crate::attr::resolve(
            factory.default_attributes(),
            &tokens,
            &crate::policy::DefaultPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_pin_single_endpoint_follows_type() {
        let pin = Pin;
        let attrs = resolved(&pin, &["type=input", "facing=east"]);
        let instance = pin.create(Location::new(10, 10), attrs);
        assert_eq!(instance.ends.len(), 1);
        assert_eq!(instance.ends[0].direction.as_str(), "input");
        assert_eq!(instance.ends[0].absolute, Location::new(10, 10));

        let attrs = resolved(&pin, &["type=output"]);
        let instance = pin.create(Location::new(0, 0), attrs);
        assert_eq!(instance.ends[0].direction.as_str(), "output");
    }

    #[test]
    fn test_pin_appearance_defaults_to_classic_via_policy() {
        let pin = Pin;
        let attrs = resolved(&pin, &[]);
        assert_eq!(attrs.token("appearance"), Some("classic"));
    }

    #[test]
    fn test_tunnel_is_inout() {
        let tunnel = Tunnel;
        let attrs = resolved(&tunnel, &["width=4"]);
        let instance = tunnel.create(Location::new(0, 0), attrs);
        assert_eq!(instance.ends[0].direction.as_str(), "inout");
        assert_eq!(instance.ends[0].width, 4);
    }

    #[test]
    fn test_constant_value_canonical() {
        let constant = Constant;
        let attrs = resolved(&constant, &["value=255"]);
        assert_eq!(attrs.value("value").unwrap().canonical(), "0xff");
    }

    #[test]
    fn test_splitter_end_widths_distribute_remainder() {
        assert_eq!(Splitter::end_widths(2, 2), vec![1, 1]);
        assert_eq!(Splitter::end_widths(8, 3), vec![3, 3, 2]);
        assert_eq!(Splitter::end_widths(1, 2), vec![1, 0]);
    }

    #[test]
    fn test_splitter_port_count_and_containment() {
        let splitter = Splitter;
        let attrs = resolved(&splitter, &["fanout=4", "incoming=8"]);
        let instance = splitter.create(Location::new(50, 50), attrs);
        assert_eq!(instance.ends.len(), 5);
        for end in &instance.ends {
            assert!(
                instance.bounds.contains(end.absolute),
                "end {} outside bounds",
                end.index
            );
        }
    }

    #[test]
    fn test_facing_rotates_bounds() {
        let pin = Pin;
        let east = pin.offset_bounds(&resolved(&pin, &["facing=east"]));
        let west = pin.offset_bounds(&resolved(&pin, &["facing=west"]));
        assert_eq!(east, Bounds::new(-20, -10, 20, 20));
        assert_eq!(west, Bounds::new(0, -10, 20, 20));
    }
}
