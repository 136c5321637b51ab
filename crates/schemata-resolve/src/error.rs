use thiserror::Error;
use miette::Diagnostic;

/// Fatal errors raised while building or configuring the registry.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The ambiguous-name index was missing when the harvest pass started.
    /// This is a lifecycle bug in the host, not a problem with the input.
    #[error("Could not harvest types: the ambiguous-name index was not initialized")]
    #[diagnostic(
        code(schemata_resolve::index_uninitialized),
        help("Construct the registry with `TypeRegistry::new` before harvesting")
    )]
    IndexUninitialized,

    /// The resolver configuration could not be parsed.
    #[error("Invalid resolver configuration: {0}")]
    #[diagnostic(
        code(schemata_resolve::invalid_config),
        help("Check the TOML syntax and the field names of the resolver configuration")
    )]
    InvalidConfig(String),
}

impl From<toml::de::Error> for RegistryError {
    fn from(err: toml::de::Error) -> Self {
        RegistryError::InvalidConfig(err.to_string())
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A type reference that could not be resolved.
///
/// Plain lookups report a miss as `None`; this error only exists for callers
/// that want the miss as a diagnostic.
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Type not found: could not resolve `{reference}`")]
    #[diagnostic(
        code(schemata_resolve::type_not_found),
        help("Is `{reference}` declared in a registered package and imported where it is used?")
    )]
    NotFound {
        /// The reference exactly as it was looked up.
        reference: String,
        /// The file the reference was seen in, if any.
        location: Option<String>,
    },
}
