//! Resolution of type-name references.
//!
//! `resolve` answers "which definition does this name refer to, as seen
//! from this file?" Both qualified (`models.User`) and bare (`User`)
//! references are handled. Each strategy is a plain lookup; no strategy
//! re-enters `resolve`, and an empty package path ends the search.

use schemata_source::SourceUnit;
use crate::{
    definitions::{AmbiguousKey, TypeDefinition},
    error::ResolveError,
    imports::is_import_alias,
    primitives::PrimitiveClassifier,
    registry::TypeRegistry,
};

impl<C: PrimitiveClassifier> TypeRegistry<C> {
    /// Resolve `reference` as written in `context`.
    ///
    /// Without a context the reference is looked up verbatim in the
    /// ambiguous-name index. Primitive names never resolve.
    pub fn resolve(&self, reference: &str, context: Option<&SourceUnit>) -> Option<&TypeDefinition> {
        if self.classifier.is_primitive(reference) {
            return None;
        }

        let Some(unit) = context else {
            return self.lookup_shortcut(&AmbiguousKey::literal(reference));
        };

        match reference.split_once(self.config.qualifier_separator) {
            Some((qualifier, rest)) => {
                let name = rest
                    .split(self.config.qualifier_separator)
                    .next()
                    .unwrap_or(rest);
                self.resolve_qualified(reference, qualifier, name, unit)
            }
            None => self.resolve_bare(reference, unit),
        }
    }

    /// Like `resolve`, but reports a miss as an error.
    pub fn resolve_or_miss(
        &self,
        reference: &str,
        context: Option<&SourceUnit>,
    ) -> Result<&TypeDefinition, ResolveError> {
        self.resolve(reference, context).ok_or_else(|| ResolveError::NotFound {
            reference: reference.to_string(),
            location: context.map(|unit| unit.file_path().to_string()),
        })
    }

    fn resolve_qualified(
        &self,
        reference: &str,
        qualifier: &str,
        name: &str,
        unit: &SourceUnit,
    ) -> Option<&TypeDefinition> {
        // A reference already spelled as an index key. This can shadow an
        // import whose alias equals some other package's short name.
        if !is_import_alias(unit, qualifier) {
            if let Some(def) = self.lookup_shortcut(&AmbiguousKey::literal(reference)) {
                log::trace!("`{}` resolved through the ambiguous index", reference);
                return Some(def);
            }
        }

        let mut package_path = self
            .package_path_for_qualifier(qualifier, unit)
            .unwrap_or_default();

        if package_path.is_empty() && qualifier == unit.package_name() {
            package_path = unit.package_path();
        }

        if package_path.is_empty() {
            let synthetic = format!("{}{}", self.config.synthetic_namespace_prefix, qualifier);
            if let Some(def) = self.packages.get(&synthetic).and_then(|record| record.get(name)) {
                log::trace!("`{}` resolved in synthetic package '{}'", reference, synthetic);
                return Some(def);
            }
            log::trace!("`{}`: qualifier `{}` names no known package", reference, qualifier);
        }

        self.find_in_package(package_path, name)
    }

    fn resolve_bare(&self, name: &str, unit: &SourceUnit) -> Option<&TypeDefinition> {
        let key = AmbiguousKey::joined(unit.package_name(), name, self.config.qualifier_separator);
        if let Some(def) = self.lookup_shortcut(&key) {
            return Some(def);
        }

        if let Some(def) = self.find_in_package(unit.package_path(), name) {
            return Some(def);
        }

        self.dot_import_paths(unit).find_map(|path| {
            let def = self.find_in_package(path, name);
            if def.is_some() {
                log::trace!("`{}` resolved through dot-import of '{}'", name, path);
            }
            def
        })
    }

    fn lookup_shortcut(&self, key: &AmbiguousKey) -> Option<&TypeDefinition> {
        self.index.as_ref()?.get(key)
    }
}
