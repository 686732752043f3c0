//! Default-fallback policy for attribute resolution
//!
//! Some attributes have a documented fallback that differs from the
//! factory's built-in default; it is applied only when the user did not set
//! that attribute explicitly. The table ships with one entry — components
//! render with the legacy tool's classic appearance unless asked otherwise —
//! and can be replaced wholesale from a TOML file so the rule set stays
//! data, not code.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a policy file
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse policy TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Table of attribute-name → fallback-value-text entries.
#[derive(Debug, Clone)]
pub struct DefaultPolicy {
    fallbacks: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlPolicy {
    fallbacks: HashMap<String, String>,
}

const BUILTIN_POLICY: &str = r#"
[fallbacks]
appearance = "classic"
"#;

impl DefaultPolicy {
    /// Load a policy table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a policy table from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, PolicyError> {
        let parsed: TomlPolicy = toml::from_str(content)?;
        Ok(Self {
            fallbacks: parsed.fallbacks,
        })
    }

    /// A policy with no fallbacks at all.
    pub fn empty() -> Self {
        Self {
            fallbacks: HashMap::new(),
        }
    }

    /// Fallback text for an attribute name, matched case-insensitively.
    pub fn fallback_for(&self, attr_name: &str) -> Option<&str> {
        self.fallbacks
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(attr_name))
            .map(|(_, value)| value.as_str())
    }
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self::from_toml(BUILTIN_POLICY).expect("builtin policy should be valid TOML")
    }
}
