// Shared fixtures for the schemata-resolve integration tests.
#![allow(dead_code)]

use schemata_resolve::TypeRegistry;
use schemata_source::{ParsedFile, SourceUnit, TypeExpr, UnitId};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn struct_type() -> TypeExpr {
    TypeExpr::other("struct{...}")
}

/// A harvested registry plus handles to the units registered along the way.
pub struct Fixture {
    pub registry: TypeRegistry,
    units: Vec<(String, UnitId)>,
}

impl Fixture {
    pub fn new() -> Self {
        init_logging();
        Self {
            registry: TypeRegistry::new(),
            units: Vec::new(),
        }
    }

    pub fn file(mut self, package_path: &str, file_path: &str, file: ParsedFile) -> Self {
        let id = self.registry.register_unit(package_path, file_path, file);
        self.units.push((file_path.to_string(), id));
        self
    }

    pub fn harvested(mut self) -> Self {
        self.registry.harvest().expect("harvest should succeed");
        self
    }

    pub fn unit(&self, file_path: &str) -> &SourceUnit {
        let id = self
            .units
            .iter()
            .find(|(path, _)| path == file_path)
            .map(|(_, id)| *id)
            .unwrap_or_else(|| panic!("no unit registered at {file_path}"));
        self.registry.unit(id).expect("registered unit")
    }

    /// Resolve `reference` from `file_path` and return the owning package
    /// path of the hit.
    pub fn resolve_from(&self, file_path: &str, reference: &str) -> Option<String> {
        self.registry
            .resolve(reference, Some(self.unit(file_path)))
            .map(|def| def.package_path.clone())
    }
}
