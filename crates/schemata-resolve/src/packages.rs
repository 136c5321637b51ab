use std::sync::Arc;
use fxhash::FxHashMap;
use schemata_source::UnitId;
use crate::definitions::TypeDefinition;

/// Everything registered under one package path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Short name declared by the first file registered under this path.
    /// Later files disagreeing with it do not change it.
    name: String,
    /// Member files: file path -> unit.
    files: FxHashMap<String, UnitId>,
    /// Locally declared types: bare name -> definition. Authoritative for
    /// this package whatever the ambiguous index says.
    types: FxHashMap<String, Arc<TypeDefinition>>,
}

impl PackageRecord {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: FxHashMap::default(),
            types: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &FxHashMap<String, UnitId> {
        &self.files
    }

    pub fn types(&self) -> &FxHashMap<String, Arc<TypeDefinition>> {
        &self.types
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types.get(type_name).map(|def| def.as_ref())
    }

    pub(crate) fn add_file(&mut self, file_path: &str, unit: UnitId) {
        self.files.insert(file_path.to_string(), unit);
    }

    pub(crate) fn remove_file(&mut self, file_path: &str) {
        self.files.remove(file_path);
    }

    pub(crate) fn clear_types(&mut self) {
        self.types.clear();
    }

    pub(crate) fn define(&mut self, def: Arc<TypeDefinition>) {
        self.types.insert(def.name.clone(), def);
    }
}
