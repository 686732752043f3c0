//! Attribute resolution: factory defaults + fallback policy + overrides

use thiserror::Error;

use super::set::AttributeSet;
use crate::policy::DefaultPolicy;

/// Errors that can occur while resolving attribute overrides
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Override token is not a well-formed `key=value` pair
    #[error("invalid attribute override '{token}': expected key=value")]
    InvalidOverrideSyntax { token: String },

    /// Override names an attribute the factory does not declare
    #[error("unknown attribute: {name}")]
    UnknownAttribute { name: String },

    /// The attribute's parser rejected the override text
    #[error("invalid value '{value}' for attribute '{name}': {reason}")]
    InvalidAttributeValue {
        name: String,
        value: String,
        reason: String,
    },
}

/// Split a well-formed override into trimmed key and value. A valid token
/// contains exactly one `=` with non-empty text on both sides.
fn split_override(token: &str) -> Result<(&str, &str), ResolveError> {
    let syntax_error = || ResolveError::InvalidOverrideSyntax {
        token: token.to_string(),
    };
    let mut parts = token.splitn(3, '=');
    let key = parts.next().unwrap_or("").trim();
    let value = match (parts.next(), parts.next()) {
        (Some(value), None) => value.trim(),
        _ => return Err(syntax_error()),
    };
    if key.is_empty() || value.is_empty() {
        return Err(syntax_error());
    }
    Ok((key, value))
}

/// Whether any override explicitly names the given attribute. Malformed
/// tokens are skipped here; they fail later in the strict pass.
fn explicitly_set(overrides: &[String], attr_name: &str) -> bool {
    overrides.iter().any(|token| {
        token
            .split_once('=')
            .map(|(key, _)| key.trim().eq_ignore_ascii_case(attr_name))
            .unwrap_or(false)
    })
}

/// Resolve a factory's attribute set against user overrides.
///
/// `defaults` is a freshly built copy of the factory defaults and is
/// consumed; the factory's own descriptors are never mutated. The fallback
/// policy runs first and is skipped for any attribute the user set
/// explicitly; overrides then apply in order, later occurrences of the same
/// key overwriting earlier ones.
pub fn resolve(
    defaults: AttributeSet,
    overrides: &[String],
    policy: &DefaultPolicy,
) -> Result<AttributeSet, ResolveError> {
    let mut attrs = defaults;

    for index in 0..attrs.len() {
        let value = {
            let entry = attrs.entry_at(index);
            let name = entry.descriptor.name;
            let fallback = match policy.fallback_for(name) {
                Some(text) => text,
                None => continue,
            };
            if explicitly_set(overrides, name) {
                continue;
            }
            entry.descriptor.ty.parse(fallback).map_err(|reason| {
                ResolveError::InvalidAttributeValue {
                    name: name.to_string(),
                    value: fallback.to_string(),
                    reason,
                }
            })?
        };
        attrs.set_at(index, value);
    }

    for token in overrides {
        let (key, text) = split_override(token)?;
        let index = attrs
            .position(key)
            .ok_or_else(|| ResolveError::UnknownAttribute {
                name: key.to_string(),
            })?;
        let value = {
            let entry = attrs.entry_at(index);
            entry
                .descriptor
                .ty
                .parse(text)
                .map_err(|reason| ResolveError::InvalidAttributeValue {
                    name: entry.descriptor.name.to_string(),
                    value: text.to_string(),
                    reason,
                })?
        };
        attrs.set_at(index, value);
    }

    Ok(attrs)
}
