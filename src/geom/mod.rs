//! Grid geometry: locations, directions, bounds, and derived pin layout
//!
//! All coordinates are integers on the circuit grid. Factories declare port
//! offsets and shape bounds relative to their anchor; this module turns them
//! into absolute positions for a placed instance.

pub mod engine;
pub mod types;

pub use engine::{derive_geometry, DerivedGeometry, EndPoint, PortDirection, PortSpec};
pub use types::{Bounds, Direction, Location};
