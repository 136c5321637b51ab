//! Mapping qualifiers to package paths through a file's imports.
//!
//! Go-style import rules, without a type checker:
//! - `import m "app/models"` binds the qualifier `m`.
//! - `import "app/models"` binds the short name the package declares, which
//!   is only known if the package was registered.
//! - `import _ "app/models"` binds nothing, but its short name is still
//!   accepted as a last resort.
//! - `import . "app/models"` merges the package into the file scope.

use schemata_source::{ImportName, SourceUnit};
use crate::{primitives::PrimitiveClassifier, registry::TypeRegistry};

/// Whether any import of `unit` uses `alias` as its explicit name.
/// The blank (`_`) and dot (`.`) aliases count.
pub fn is_import_alias(unit: &SourceUnit, alias: &str) -> bool {
    unit.file()
        .imports
        .iter()
        .any(|import| import.name.as_alias() == Some(alias))
}

impl<C: PrimitiveClassifier> TypeRegistry<C> {
    /// Find the package path `qualifier` refers to inside `unit`.
    ///
    /// Explicit aliases and inferred short names are matched in one pass in
    /// import order. Blank imports are only considered when that pass finds
    /// nothing. Returns `None` when no import matches.
    pub fn package_path_for_qualifier<'u>(
        &self,
        qualifier: &str,
        unit: &'u SourceUnit,
    ) -> Option<&'u str> {
        let imports = &unit.file().imports;
        let mut has_blank = false;

        for import in imports {
            match &import.name {
                ImportName::Alias(alias) if alias == qualifier => return Some(import.path()),
                ImportName::Inferred if self.short_name_of(import.path()) == Some(qualifier) => {
                    return Some(import.path());
                }
                ImportName::Blank => has_blank = true,
                _ => {}
            }
        }

        if !has_blank {
            return None;
        }

        log::trace!("Falling back to blank imports for qualifier `{}`", qualifier);
        imports
            .iter()
            .filter(|import| import.is_anonymous())
            .find(|import| self.short_name_of(import.path()) == Some(qualifier))
            .map(|import| import.path())
    }

    /// Package paths merged into `unit`'s scope by dot-imports, in order.
    pub fn dot_import_paths<'u>(&self, unit: &'u SourceUnit) -> impl Iterator<Item = &'u str> {
        unit.file()
            .imports
            .iter()
            .filter(|import| import.is_dot())
            .map(|import| import.path())
    }

    fn short_name_of(&self, package_path: &str) -> Option<&str> {
        self.packages.get(package_path).map(|record| record.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemata_source::{Import, ParsedFile};

    fn registry_with(packages: &[(&str, &str)]) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        for (path, name) in packages {
            registry.register_unit(path, &format!("{}/doc.go", path), ParsedFile::new(*name));
        }
        registry
    }

    fn context(registry: &mut TypeRegistry, file: ParsedFile) -> SourceUnit {
        let id = registry.register_unit("app/handlers", "handlers/h.go", file);
        registry.unit(id).unwrap().clone()
    }

    #[test]
    fn test_alias_detection() {
        let mut registry = TypeRegistry::new();
        let unit = context(
            &mut registry,
            ParsedFile::new("handlers")
                .with_import(Import::aliased("m", "app/models"))
                .with_import(Import::blank("app/db"))
                .with_import(Import::inferred("fmt")),
        );

        assert!(is_import_alias(&unit, "m"));
        assert!(is_import_alias(&unit, "_"));
        assert!(!is_import_alias(&unit, "fmt"));
        assert!(!is_import_alias(&unit, "models"));
    }

    #[test]
    fn test_explicit_alias() {
        let mut registry = registry_with(&[("app/models", "models")]);
        let unit = context(
            &mut registry,
            ParsedFile::new("handlers").with_import(Import::aliased("m", "\"app/models\"")),
        );

        assert_eq!(registry.package_path_for_qualifier("m", &unit), Some("app/models"));
        assert_eq!(registry.package_path_for_qualifier("models", &unit), None);
    }

    #[test]
    fn test_inferred_short_name_comes_from_the_package_record() {
        let mut registry = registry_with(&[("app/v2/models", "models")]);
        let unit = context(
            &mut registry,
            ParsedFile::new("handlers")
                .with_import(Import::inferred("app/v2/models"))
                .with_import(Import::inferred("app/unregistered")),
        );

        assert_eq!(
            registry.package_path_for_qualifier("models", &unit),
            Some("app/v2/models")
        );
        assert_eq!(registry.package_path_for_qualifier("v2", &unit), None);
        assert_eq!(registry.package_path_for_qualifier("unregistered", &unit), None);
    }

    #[test]
    fn test_blank_import_fallback() {
        let mut registry = registry_with(&[("app/plugins", "plugins")]);
        let unit = context(
            &mut registry,
            ParsedFile::new("handlers").with_import(Import::blank("app/plugins")),
        );

        assert_eq!(
            registry.package_path_for_qualifier("plugins", &unit),
            Some("app/plugins")
        );
    }

    #[test]
    fn test_direct_match_beats_blank_import() {
        let mut registry = registry_with(&[("app/a/models", "models"), ("app/b/models", "models")]);
        let unit = context(
            &mut registry,
            ParsedFile::new("handlers")
                .with_import(Import::blank("app/a/models"))
                .with_import(Import::inferred("app/b/models")),
        );

        assert_eq!(
            registry.package_path_for_qualifier("models", &unit),
            Some("app/b/models")
        );
    }

    #[test]
    fn test_dot_import_paths() {
        let mut registry = TypeRegistry::new();
        let unit = context(
            &mut registry,
            ParsedFile::new("handlers")
                .with_import(Import::dot("app/models"))
                .with_import(Import::inferred("fmt"))
                .with_import(Import::dot("\"app/shared\"")),
        );

        let paths: Vec<_> = registry.dot_import_paths(&unit).collect();
        assert_eq!(paths, vec!["app/models", "app/shared"]);
    }
}
