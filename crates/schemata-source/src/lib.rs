//! Parsed source units for the schemata generator.
//!
//! This crate is responsible for:
//! - The host-facing syntax model a parser hands to the generator
//!   (`ParsedFile`, imports, declarations and type expressions)
//! - Tracking every registered file together with its file path and
//!   owning package path in a `SourceStore`
//!
//! Parsing itself happens outside this crate. A host walks the source tree,
//! parses each file however it likes and lowers the result into a
//! `ParsedFile`. Only the parts needed for type-name resolution are modelled;
//! anything else a declaration or type expression carries stays opaque.

mod file;
mod store;

pub use file::{Declaration, Import, ImportName, ParsedFile, TypeDecl, TypeExpr};
pub use store::{Registration, SourceStore, SourceUnit, UnitId};
