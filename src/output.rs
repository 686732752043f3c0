//! JSON report assembly
//!
//! All machine-readable output goes through serde structs so field order is
//! fixed by declaration and identical inputs always serialize to identical
//! bytes. String escaping (including `\u00XX` escapes for control
//! characters) is the JSON writer's.

use serde::Serialize;

use crate::catalog::{Catalog, ComponentInstance};
use crate::geom::{Bounds, EndPoint, Location, PortDirection};

/// A grid point as `{x,y}`.
#[derive(Debug, Serialize)]
pub struct PointReport {
    pub x: i32,
    pub y: i32,
}

/// An anchor-relative offset as `{dx,dy}`.
#[derive(Debug, Serialize)]
pub struct OffsetReport {
    pub dx: i32,
    pub dy: i32,
}

/// One pin of the emitted component.
#[derive(Debug, Serialize)]
pub struct PinReport {
    pub name: String,
    pub direction: PortDirection,
    pub width: u8,
    pub index: usize,
    pub absolute: PointReport,
    pub offset: OffsetReport,
}

impl PinReport {
    fn from_end(end: &EndPoint) -> Self {
        Self {
            name: end.name.clone(),
            direction: end.direction,
            width: end.width,
            index: end.index,
            absolute: PointReport {
                x: end.absolute.x,
                y: end.absolute.y,
            },
            offset: OffsetReport {
                dx: end.offset.0,
                dy: end.offset.1,
            },
        }
    }
}

/// Absolute bounding-box edges.
#[derive(Debug, Serialize)]
pub struct EdgesReport {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Anchor-relative corner offsets, formatted as `(dx,dy)` pairs.
#[derive(Debug, Serialize)]
pub struct CornersReport {
    #[serde(rename = "topLeft")]
    pub top_left: String,
    #[serde(rename = "bottomRight")]
    pub bottom_right: String,
}

/// Bounding box: absolute edges plus anchor-relative corners.
#[derive(Debug, Serialize)]
pub struct BoundsReport {
    pub absolute: EdgesReport,
    pub offset: CornersReport,
}

/// The combined document printed for one emitted component.
#[derive(Debug, Serialize)]
pub struct EmitReport {
    pub component: String,
    pub location: PointReport,
    #[serde(rename = "componentXml")]
    pub component_xml: String,
    pub bbox: BoundsReport,
    pub pins: Vec<PinReport>,
}

fn format_point(x: i32, y: i32) -> String {
    format!("({},{})", x, y)
}

/// Bounding-box report for an instance anchored at `anchor`.
pub fn bounds_report(bounds: Bounds, anchor: Location) -> BoundsReport {
    let left = bounds.x;
    let top = bounds.y;
    let right = bounds.right();
    let bottom = bounds.bottom();
    BoundsReport {
        absolute: EdgesReport {
            left,
            top,
            right,
            bottom,
        },
        offset: CornersReport {
            top_left: format_point(left - anchor.x, top - anchor.y),
            bottom_right: format_point(right - anchor.x, bottom - anchor.y),
        },
    }
}

/// Pin reports in port declaration order.
pub fn pin_reports(ends: &[EndPoint]) -> Vec<PinReport> {
    ends.iter().map(PinReport::from_end).collect()
}

/// Assemble the combined report. `component` is echoed as the caller
/// supplied it; `xml` is the serialized element text.
pub fn emit_report(component: &str, instance: &ComponentInstance, xml: String) -> EmitReport {
    EmitReport {
        component: component.to_string(),
        location: PointReport {
            x: instance.location.x,
            y: instance.location.y,
        },
        component_xml: xml,
        bbox: bounds_report(instance.bounds, instance.location),
        pins: pin_reports(&instance.ends),
    }
}

/// One attribute row in the catalog listing.
#[derive(Debug, Serialize)]
pub struct AttributeEntry {
    pub name: String,
    pub description: String,
    pub default: String,
}

/// One factory row in the catalog listing.
#[derive(Debug, Serialize)]
pub struct ComponentEntry {
    pub name: String,
    pub library: String,
    pub attributes: Vec<AttributeEntry>,
}

/// The catalog listing document.
#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub components: Vec<ComponentEntry>,
}

/// Describe every factory in the catalog: display name, owning library,
/// and non-hidden attributes with canonically formatted defaults.
/// Components and attributes are both sorted case-insensitively by name,
/// so repeated listings are identical.
pub fn catalog_report(catalog: &Catalog) -> CatalogReport {
    let mut components: Vec<ComponentEntry> = catalog
        .libraries()
        .iter()
        .flat_map(|library| {
            library.factories.iter().map(|factory| {
                let mut attributes: Vec<AttributeEntry> = factory
                    .attributes()
                    .into_iter()
                    .filter(|d| !d.hidden)
                    .map(|d| AttributeEntry {
                        name: d.name.to_string(),
                        description: d.label.to_string(),
                        default: d.default.canonical(),
                    })
                    .collect();
                attributes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                ComponentEntry {
                    name: factory.display_name().to_string(),
                    library: library.name.clone(),
                    attributes,
                }
            })
        })
        .collect();
    components.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    CatalogReport { components }
}
