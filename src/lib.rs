//! Circuit Scribe - component instantiation and canonical emission
//!
//! This library resolves a component-type name, a placement location, and a
//! set of textual attribute overrides into a concrete component instance,
//! derives its pin geometry, and serializes it as the persisted-circuit XML
//! element plus a JSON geometry report.
//!
//! # Example
//!
//! ```rust
//! use circuit_scribe::{emit, Catalog, EmitRequest};
//!
//! let catalog = Catalog::builtin();
//! let emission = emit(&catalog, &EmitRequest::new("Pin")).unwrap();
//! assert!(emission.xml.starts_with("<comp"));
//! assert_eq!(emission.pins.len(), 1);
//! ```

pub mod attr;
pub mod catalog;
pub mod geom;
pub mod output;
pub mod policy;
pub mod xml;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use attr::ResolveError;
pub use catalog::{Catalog, ComponentInstance};
pub use geom::{EndPoint, Location};
pub use output::{CatalogReport, EmitReport};
pub use policy::{DefaultPolicy, PolicyError};
pub use xml::XmlError;

/// Errors that can occur during the emit pipeline
#[derive(Debug, Error)]
pub enum EmitError {
    /// No factory matches the requested name
    #[error("component not found: {name}")]
    FactoryNotFound {
        name: String,
        /// Every known factory name, sorted, for diagnostics.
        available: Vec<String>,
    },

    /// Attribute override resolution failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The XML writer failed
    #[error("serialization failed: {0}")]
    Xml(#[from] XmlError),

    /// The JSON serializer failed
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a requested artifact file failed
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One emit invocation: which component, where, with which overrides.
#[derive(Debug, Clone)]
pub struct EmitRequest {
    /// Factory name, matched case-insensitively.
    pub component: String,
    /// `key=value` overrides, applied in order.
    pub overrides: Vec<String>,
    /// Anchor location; the origin when not given.
    pub location: Location,
}

impl EmitRequest {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            overrides: vec![],
            location: Location::new(0, 0),
        }
    }

    /// Add one `key=value` override.
    pub fn with_override(mut self, token: impl Into<String>) -> Self {
        self.overrides.push(token.into());
        self
    }

    /// Set the anchor location.
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

/// Configuration for the emit pipeline
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Pretty-print the XML fragment.
    pub pretty_xml: bool,
    /// Default-fallback table applied before explicit overrides.
    pub policy: DefaultPolicy,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            pretty_xml: false,
            policy: DefaultPolicy::default(),
        }
    }
}

impl EmitConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the XML fragment is pretty-printed
    pub fn with_pretty_xml(mut self, pretty: bool) -> Self {
        self.pretty_xml = pretty;
        self
    }

    /// Set the default-fallback policy
    pub fn with_policy(mut self, policy: DefaultPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// The result of one emit invocation.
#[derive(Debug)]
pub struct Emission {
    /// The component name as the caller supplied it.
    pub component: String,
    pub location: Location,
    /// Serialized component element.
    pub xml: String,
    /// The placed instance, with resolved attributes and derived geometry.
    pub instance: ComponentInstance,
    /// Port instances in declaration order.
    pub pins: Vec<EndPoint>,
}

impl Emission {
    /// The combined JSON document for standard output.
    pub fn report_json(&self) -> Result<String, EmitError> {
        let report = output::emit_report(&self.component, &self.instance, self.xml.clone());
        Ok(serde_json::to_string(&report)?)
    }

    /// The standalone pin-list JSON array.
    pub fn pins_json(&self) -> Result<String, EmitError> {
        Ok(serde_json::to_string(&output::pin_reports(&self.pins))?)
    }
}

/// Emit one component with default configuration.
///
/// This is the main entry point for the library: lookup, attribute
/// resolution, geometry derivation, and XML serialization in one call.
///
/// # Example
///
/// ```rust
/// use circuit_scribe::{emit, Catalog, EmitRequest, Location};
///
/// let catalog = Catalog::builtin();
/// let request = EmitRequest::new("AND Gate")
///     .with_override("inputs=3")
///     .at(Location::new(40, 30));
///
/// let emission = emit(&catalog, &request).unwrap();
/// assert_eq!(emission.pins.len(), 4);
/// assert!(emission.xml.contains(r#"name="AND Gate""#));
/// ```
pub fn emit(catalog: &Catalog, request: &EmitRequest) -> Result<Emission, EmitError> {
    emit_with_config(catalog, request, &EmitConfig::default())
}

/// Emit one component with custom configuration.
pub fn emit_with_config(
    catalog: &Catalog,
    request: &EmitRequest,
    config: &EmitConfig,
) -> Result<Emission, EmitError> {
    let found = catalog
        .find(&request.component)
        .ok_or_else(|| EmitError::FactoryNotFound {
            name: request.component.clone(),
            available: catalog.names(),
        })?;

    let attrs = attr::resolve(
        found.factory.default_attributes(),
        &request.overrides,
        &config.policy,
    )?;
    let instance = found.factory.create(request.location, attrs);

    let element = xml::component_to_element(found.library_index, &instance);
    let rendered = xml::render(&element, config.pretty_xml)?;

    let pins = instance.ends.clone();
    Ok(Emission {
        component: request.component.clone(),
        location: request.location,
        xml: rendered,
        instance,
        pins,
    })
}

/// Describe every factory in the catalog as the listing JSON document.
pub fn list_catalog(catalog: &Catalog) -> Result<String, EmitError> {
    Ok(serde_json::to_string(&output::catalog_report(catalog))?)
}

/// Write an artifact file as UTF-8 text.
pub fn write_artifact(path: &Path, text: &str) -> Result<(), EmitError> {
    std::fs::write(path, text).map_err(|source| EmitError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_pin_example() {
        let catalog = Catalog::builtin();
        let request = EmitRequest::new("Pin")
            .with_override("type=input")
            .with_override("facing=east")
            .at(Location::new(10, 10));
        let emission = emit(&catalog, &request).unwrap();
        assert_eq!(emission.pins.len(), 1);
        assert_eq!(emission.pins[0].direction.as_str(), "input");
        assert_eq!(emission.pins[0].absolute, Location::new(10, 10));
        assert_eq!(emission.pins[0].offset, (0, 0));
    }

    #[test]
    fn test_emit_unknown_component_lists_alternatives() {
        let catalog = Catalog::builtin();
        let err = emit(&catalog, &EmitRequest::new("Warp Core")).unwrap_err();
        match err {
            EmitError::FactoryNotFound { name, available } => {
                assert_eq!(name, "Warp Core");
                assert!(!available.is_empty());
                assert!(available.iter().any(|n| n == "Pin"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_emit_invalid_override_never_serializes() {
        let catalog = Catalog::builtin();
        let err = emit(&catalog, &EmitRequest::new("Pin").with_override("bogus")).unwrap_err();
        assert!(matches!(
            err,
            EmitError::Resolve(ResolveError::InvalidOverrideSyntax { .. })
        ));
    }

    #[test]
    fn test_emit_pretty_and_compact_share_structure() {
        let catalog = Catalog::builtin();
        let request = EmitRequest::new("AND Gate").with_override("inputs=3");

        let compact = emit(&catalog, &request).unwrap();
        let pretty = emit_with_config(
            &catalog,
            &request,
            &EmitConfig::new().with_pretty_xml(true),
        )
        .unwrap();

        let strip = |s: &str| s.replace('\n', "").replace(' ', "");
        assert_eq!(strip(&compact.xml), strip(&pretty.xml));
        assert!(pretty.xml.contains('\n'));
        assert!(!compact.xml.contains('\n'));
    }

    #[test]
    fn test_emit_echoes_requested_name() {
        let catalog = Catalog::builtin();
        let emission = emit(&catalog, &EmitRequest::new("and gate")).unwrap();
        assert_eq!(emission.component, "and gate");
        assert!(emission.xml.contains(r#"name="AND Gate""#));
    }

    #[test]
    fn test_report_json_deterministic() {
        let catalog = Catalog::builtin();
        let request = EmitRequest::new("Adder").at(Location::new(100, 60));
        let a = emit(&catalog, &request).unwrap().report_json().unwrap();
        let b = emit(&catalog, &request).unwrap().report_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_list_catalog_deterministic() {
        let catalog = Catalog::builtin();
        assert_eq!(
            list_catalog(&catalog).unwrap(),
            list_catalog(&catalog).unwrap()
        );
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        let catalog = std::sync::Arc::new(Catalog::builtin());
        let mut handles = vec![];
        for _ in 0..4 {
            let catalog = catalog.clone();
            handles.push(std::thread::spawn(move || {
                emit(&catalog, &EmitRequest::new("Clock")).unwrap().xml
            }));
        }
        let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    }
}
