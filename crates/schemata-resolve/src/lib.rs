//! Cross-package type definition registry and name resolution.
//!
//! Given every parsed file of a source tree, this crate discovers each named
//! type declaration and answers which declaration a type reference refers
//! to, following import aliases, blank imports, dot-imports and packages
//! that share a short name. There is no type checker behind it; when a name
//! is ambiguous the fast path is dropped and lookups fall back to the
//! package records, which are always authoritative.
//!
//! The registry moves through three phases:
//!
//! 1. **Collection**: `TypeRegistry::register_unit` for every file, in any
//!    order.
//! 2. **Harvest**: one `TypeRegistry::harvest` call builds the package
//!    records and the ambiguous-name index and returns precomputed schemas
//!    for aliases of primitive types.
//! 3. **Query**: any number of read-only `TypeRegistry::resolve` calls.
//!
//! ```rust
//! use schemata_resolve::TypeRegistry;
//! use schemata_source::{Import, ParsedFile, TypeExpr};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register_unit(
//!     "app/models",
//!     "models/user.go",
//!     ParsedFile::new("models").with_type("User", TypeExpr::other("struct{...}")),
//! );
//! let handler = registry.register_unit(
//!     "app/handlers",
//!     "handlers/user.go",
//!     ParsedFile::new("handlers").with_import(Import::inferred("app/models")),
//! );
//! registry.harvest()?;
//!
//! let user = registry.resolve("models.User", registry.unit(handler)).unwrap();
//! assert_eq!(user.package_path, "app/models");
//! # Ok::<(), schemata_resolve::RegistryError>(())
//! ```

pub mod config;
pub mod definitions;
pub mod error;
pub mod harvest;
pub mod imports;
pub mod index;
pub mod packages;
pub mod primitives;
pub mod registry;
pub mod resolver;
pub mod schema;

pub use config::ResolverConfig;
pub use definitions::{AmbiguousKey, TypeDefinition};
pub use error::{RegistryError, RegistryResult, ResolveError};
pub use harvest::HarvestedSchemas;
pub use index::AmbiguousIndex;
pub use packages::PackageRecord;
pub use primitives::{GoPrimitives, PrimitiveClassifier};
pub use registry::TypeRegistry;
pub use schema::{GeneratedSchema, PrimitiveSchema, SchemaType};
