//! Canonical component element construction
//!
//! Builds the `<comp>` element exactly as the persisted circuit file
//! schema expects it: the owning library's load-order index, the anchor
//! location, the factory name, and one `<a>` child per attribute that is
//! both visible and changed from its factory default. Attribute values are
//! written in canonical formatting, never the raw override text.

use crate::catalog::ComponentInstance;

use super::tree::XmlElement;

/// Render a component instance as its persisted-file element.
///
/// `library_index` must be the owning library's position in the catalog's
/// load order; downstream consumers resolve the reference purely by that
/// position, and this function never renumbers.
pub fn component_to_element(library_index: usize, instance: &ComponentInstance) -> XmlElement {
    let mut element = XmlElement::new("comp")
        .attr("lib", library_index.to_string())
        .attr("loc", instance.location.to_string())
        .attr("name", instance.name.clone());

    for entry in instance.attrs.iter() {
        if entry.descriptor.hidden || entry.is_default() {
            continue;
        }
        element = element.child(
            XmlElement::new("a")
                .attr("name", entry.descriptor.name)
                .attr("val", entry.value.canonical()),
        );
    }

    element
}
