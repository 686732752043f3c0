//! Derived geometry for placed component instances

use serde::Serialize;

use super::types::{Bounds, Location};

/// A connection point declared by a factory, relative to the anchor.
#[derive(Debug, Clone)]
pub struct PortSpec {
    pub dx: i32,
    pub dy: i32,
    pub input: bool,
    pub output: bool,
    pub width: u8,
    pub tooltip: Option<String>,
}

impl PortSpec {
    /// A port that accepts a signal.
    pub fn input(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            input: true,
            output: false,
            width: 1,
            tooltip: None,
        }
    }

    /// A port that produces a signal.
    pub fn output(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            input: false,
            output: true,
            width: 1,
            tooltip: None,
        }
    }

    /// A port that both accepts and produces a signal.
    pub fn inout(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            input: true,
            output: true,
            width: 1,
            tooltip: None,
        }
    }

    pub fn with_width(mut self, width: u8) -> Self {
        self.width = width;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Signal direction of a resolved end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
    Inout,
}

impl PortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
            PortDirection::Inout => "inout",
        }
    }
}

/// A placed connection point: the port template resolved against an anchor.
#[derive(Debug, Clone)]
pub struct EndPoint {
    pub index: usize,
    pub name: String,
    pub direction: PortDirection,
    pub width: u8,
    pub absolute: Location,
    /// Anchor-relative offset; recovers the declared port offset.
    pub offset: (i32, i32),
}

/// Geometry derived for one placed instance.
#[derive(Debug, Clone)]
pub struct DerivedGeometry {
    /// Absolute bounding box; contains every end point, edges inclusive.
    pub bounds: Bounds,
    pub ends: Vec<EndPoint>,
}

/// Resolve a port's display name: the declared tooltip when present and
/// non-blank, else a stable positional placeholder.
fn resolve_name(spec: &PortSpec, index: usize) -> String {
    match &spec.tooltip {
        Some(tip) if !tip.trim().is_empty() => tip.clone(),
        _ => format!("port{}", index),
    }
}

fn classify(spec: &PortSpec) -> PortDirection {
    match (spec.input, spec.output) {
        (true, true) => PortDirection::Inout,
        (false, true) => PortDirection::Output,
        _ => PortDirection::Input,
    }
}

/// Translate a factory's declared ports and shape bounds by the anchor.
///
/// Absolute pin location is the declared offset plus the anchor; the
/// reported offset is absolute minus anchor, so it round-trips to the
/// declared value. The bounding box is the declared shape rectangle
/// translated by the anchor, which contains every declared port by
/// construction.
pub fn derive_geometry(
    ports: &[PortSpec],
    offset_bounds: Bounds,
    anchor: Location,
) -> DerivedGeometry {
    let ends = ports
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let absolute = anchor.translate(spec.dx, spec.dy);
            EndPoint {
                index,
                name: resolve_name(spec, index),
                direction: classify(spec),
                width: spec.width,
                absolute,
                offset: absolute.offset_from(anchor),
            }
        })
        .collect();

    DerivedGeometry {
        bounds: offset_bounds.translate(anchor),
        ends,
    }
}
