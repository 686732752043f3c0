//! Component factory handles and the instances they produce

use crate::attr::{AttrDescriptor, AttributeSet};
use crate::geom::{derive_geometry, Bounds, EndPoint, Location, PortSpec};

/// Blueprint for one component kind. Factories are held by the catalog as
/// uniformly-typed handles; `Send + Sync` so a loaded catalog can be shared
/// read-only across threads.
pub trait ComponentFactory: Send + Sync {
    /// Canonical name, as written into the persisted file.
    fn name(&self) -> &str;

    /// Display name used in listings and lookup; usually the canonical name.
    fn display_name(&self) -> &str {
        self.name()
    }

    /// Declared attributes, in the order the persisted format expects.
    fn attributes(&self) -> Vec<AttrDescriptor>;

    /// Port template for a resolved attribute set, relative to the anchor.
    fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec>;

    /// Shape bounds for a resolved attribute set, relative to the anchor.
    /// Must contain every declared port offset, edges inclusive.
    fn offset_bounds(&self, attrs: &AttributeSet) -> Bounds;

    /// A fresh attribute set holding every declared default. Never shared,
    /// so resolution can mutate its copy freely.
    fn default_attributes(&self) -> AttributeSet {
        AttributeSet::from_descriptors(self.attributes())
    }

    /// Instantiate this component at a location with resolved attributes.
    fn create(&self, location: Location, attrs: AttributeSet) -> ComponentInstance {
        let geometry = derive_geometry(&self.ports(&attrs), self.offset_bounds(&attrs), location);
        ComponentInstance {
            name: self.name().to_string(),
            location,
            attrs,
            bounds: geometry.bounds,
            ends: geometry.ends,
        }
    }
}

/// One placed component: resolved attributes plus derived geometry.
/// Created fresh per invocation and discarded after serialization.
#[derive(Debug, Clone)]
pub struct ComponentInstance {
    pub name: String,
    pub location: Location,
    pub attrs: AttributeSet,
    /// Absolute bounding box.
    pub bounds: Bounds,
    /// Port instances, in declaration order.
    pub ends: Vec<EndPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::{AttrType, AttrValue};

    struct Sensor;

    impl ComponentFactory for Sensor {
        fn name(&self) -> &str {
            "Sensor"
        }

        fn attributes(&self) -> Vec<AttrDescriptor> {
            vec![AttrDescriptor::new(
                "width",
                "data bits",
                AttrType::WidthBits { max: 64 },
                AttrValue::Width(1),
            )]
        }

        fn ports(&self, attrs: &AttributeSet) -> Vec<PortSpec> {
            let width = attrs.width("width").unwrap_or(1);
            vec![PortSpec::input(0, 0).with_width(width)]
        }

        fn offset_bounds(&self, _attrs: &AttributeSet) -> Bounds {
            Bounds::new(-20, -10, 20, 20)
        }
    }

    #[test]
    fn test_default_attributes_are_fresh() {
        let factory = Sensor;
        let mut first = factory.default_attributes();
        let pos = first.position("width").unwrap();
        first.set_at(pos, AttrValue::Width(8));
        let second = factory.default_attributes();
        assert_eq!(second.width("width"), Some(1));
    }

    #[test]
    fn test_create_derives_geometry() {
        let factory = Sensor;
        let instance = factory.create(Location::new(30, 40), factory.default_attributes());
        assert_eq!(instance.name, "Sensor");
        assert_eq!(instance.ends.len(), 1);
        assert_eq!(instance.ends[0].absolute, Location::new(30, 40));
        assert_eq!(instance.bounds, Bounds::new(10, 30, 20, 20));
    }

    #[test]
    fn test_ports_follow_attributes() {
        let factory = Sensor;
        let mut attrs = factory.default_attributes();
        let pos = attrs.position("width").unwrap();
        attrs.set_at(pos, AttrValue::Width(16));
        let instance = factory.create(Location::new(0, 0), attrs);
        assert_eq!(instance.ends[0].width, 16);
    }
}
