use serde::{Deserialize, Serialize};
use crate::error::RegistryResult;

/// Tunables for harvesting and resolution.
///
/// Every field has a default, so an empty document is a valid configuration:
///
/// ```toml
/// synthetic_namespace_prefix = "pkg/"
/// emit_primitive_schemas = true
/// qualifier_separator = "."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix joined with an otherwise unresolvable qualifier to form the
    /// package path of the reserved pseudo-package namespace.
    pub synthetic_namespace_prefix: String,

    /// Whether harvesting collects schemas for aliases of primitive types.
    pub emit_primitive_schemas: bool,

    /// Separator between a qualifier and a type name in references.
    pub qualifier_separator: char,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            synthetic_namespace_prefix: default_synthetic_namespace_prefix(),
            emit_primitive_schemas: true,
            qualifier_separator: '.',
        }
    }
}

pub fn default_synthetic_namespace_prefix() -> String {
    "pkg/".to_string()
}

impl ResolverConfig {
    /// Parse a configuration from TOML source. Reading the file is left to
    /// the host.
    pub fn from_toml_str(source: &str) -> RegistryResult<Self> {
        Ok(toml::from_str(source)?)
    }
}
