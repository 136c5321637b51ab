use fxhash::FxHashMap;
use schemata_source::{ParsedFile, SourceStore, SourceUnit, UnitId};
use crate::{
    config::ResolverConfig,
    definitions::TypeDefinition,
    index::AmbiguousIndex,
    packages::PackageRecord,
    primitives::{GoPrimitives, PrimitiveClassifier},
};

/// The registry of every type definition in a source tree.
///
/// Used in three phases: register every unit, run `harvest` once, then
/// answer `resolve` queries. The registry is single-threaded; hosts parsing
/// files in parallel must funnel registrations through one thread.
#[derive(Debug, Clone)]
pub struct TypeRegistry<C = GoPrimitives> {
    pub(crate) store: SourceStore,
    pub(crate) packages: FxHashMap<String, PackageRecord>,
    /// Always `Some` after construction; harvesting checks it anyway.
    pub(crate) index: Option<AmbiguousIndex>,
    pub(crate) classifier: C,
    pub(crate) config: ResolverConfig,
}

impl TypeRegistry<GoPrimitives> {
    pub fn new() -> Self {
        Self::with_classifier_and_config(GoPrimitives, ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_classifier_and_config(GoPrimitives, config)
    }
}

impl Default for TypeRegistry<GoPrimitives> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PrimitiveClassifier> TypeRegistry<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self::with_classifier_and_config(classifier, ResolverConfig::default())
    }

    pub fn with_classifier_and_config(classifier: C, config: ResolverConfig) -> Self {
        Self {
            store: SourceStore::new(),
            packages: FxHashMap::default(),
            index: Some(AmbiguousIndex::new()),
            classifier,
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Register a parsed file.
    ///
    /// Registering the same `file_path` again overwrites the earlier unit.
    /// Files with an empty `package_path` are kept for iteration only and do
    /// not join any package record.
    pub fn register_unit(
        &mut self,
        package_path: &str,
        file_path: &str,
        file: ParsedFile,
    ) -> UnitId {
        let package_name = file.package_name.clone();
        let registration = self.store.insert(file_path, package_path, file);

        if let Some(previous) = registration.previous_package.as_deref() {
            if previous != package_path {
                if let Some(record) = self.packages.get_mut(previous) {
                    record.remove_file(file_path);
                }
            }
        }

        if package_path.is_empty() {
            return registration.id;
        }

        self.packages
            .entry(package_path.to_string())
            .or_insert_with(|| {
                log::debug!("New package record '{}' ({})", package_path, package_name);
                PackageRecord::new(package_name)
            })
            .add_file(file_path, registration.id);

        registration.id
    }

    /// Iterate over every registered `(file path, unit)` pair, in no
    /// particular order.
    pub fn units(&self) -> impl Iterator<Item = (&str, &SourceUnit)> {
        self.store.iter()
    }

    /// Visit every registered unit, stopping at the first error.
    pub fn try_for_each_unit<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&str, &SourceUnit) -> Result<(), E>,
    {
        for (file_path, unit) in self.store.iter() {
            visit(file_path, unit)?;
        }
        Ok(())
    }

    pub fn unit(&self, id: UnitId) -> Option<&SourceUnit> {
        self.store.get(id)
    }

    pub fn unit_by_path(&self, file_path: &str) -> Option<&SourceUnit> {
        self.store.get_by_path(file_path)
    }

    /// The unit a definition was declared in.
    pub fn unit_of(&self, def: &TypeDefinition) -> Option<&SourceUnit> {
        self.store.get(def.unit)
    }

    pub fn package(&self, package_path: &str) -> Option<&PackageRecord> {
        self.packages.get(package_path)
    }

    pub fn packages(&self) -> impl Iterator<Item = (&str, &PackageRecord)> {
        self.packages.iter().map(|(path, record)| (path.as_str(), record))
    }

    pub fn index(&self) -> Option<&AmbiguousIndex> {
        self.index.as_ref()
    }

    /// Look `type_name` up in the package registered at `package_path`.
    /// An empty path never matches.
    pub fn find_in_package(&self, package_path: &str, type_name: &str) -> Option<&TypeDefinition> {
        if package_path.is_empty() {
            return None;
        }
        self.packages.get(package_path)?.get(type_name)
    }
}
