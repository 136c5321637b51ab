// The harvest pass: walk every registered unit once, build a definition for
// each top-level type declaration, rebuild the package records and the
// ambiguous-name index, and precompute schemas for aliases of primitives.

use std::sync::Arc;
use fxhash::FxHashMap;
use crate::{
    definitions::TypeDefinition,
    error::{RegistryError, RegistryResult},
    index::{AmbiguousIndex, Offer},
    primitives::PrimitiveClassifier,
    registry::TypeRegistry,
    schema::GeneratedSchema,
};

/// Schemas produced by a harvest, keyed by the primitive alias they describe.
pub type HarvestedSchemas = FxHashMap<Arc<TypeDefinition>, GeneratedSchema>;

impl<C: PrimitiveClassifier> TypeRegistry<C> {
    /// Run the harvest pass over every registered unit.
    ///
    /// Returns the schemas of every `type X <primitive>` declaration. Each
    /// pass starts from empty type maps and an empty index, so a unit
    /// re-registered since the last pass is seen only in its current form.
    /// Fails only if the ambiguous-name index is missing, before any state
    /// is touched.
    pub fn harvest(&mut self) -> RegistryResult<HarvestedSchemas> {
        let mut schemas = HarvestedSchemas::default();
        let mut stats = HarvestStats::default();

        let Self {
            store,
            packages,
            index,
            classifier,
            config,
        } = self;
        let index = index.as_mut().ok_or(RegistryError::IndexUninitialized)?;
        *index = AmbiguousIndex::new();
        for record in packages.values_mut() {
            record.clear_types();
        }

        for (file_path, unit) in store.iter() {
            for decl in unit.file().type_decls() {
                let def = Arc::new(TypeDefinition {
                    package_path: unit.package_path().to_string(),
                    package_name: unit.package_name().to_string(),
                    unit: unit.id(),
                    name: decl.name.clone(),
                    underlying: decl.ty.clone(),
                });

                if config.emit_primitive_schemas {
                    if let Some(ident) = decl.ty.bare_ident() {
                        if classifier.is_primitive(ident) {
                            schemas.insert(
                                Arc::clone(&def),
                                GeneratedSchema {
                                    package_path: def.package_path.clone(),
                                    package_name: def.package_name.clone(),
                                    schema: classifier.canonical_schema(ident),
                                },
                            );
                        }
                    }
                }

                let key = def.full_name(config.qualifier_separator);
                stats.record(index.offer(key, &def));

                match packages.get_mut(unit.package_path()) {
                    Some(record) => record.define(def),
                    None => log::debug!(
                        "'{}' in '{}' has no package record; reachable through the index only",
                        decl.name,
                        file_path
                    ),
                }
                stats.definitions += 1;
            }
        }

        log::debug!(
            "Harvested {} type definitions ({} indexed, {} repeated, {} collisions), {} primitive schemas",
            stats.definitions,
            stats.inserted,
            stats.repeated,
            stats.collided,
            schemas.len()
        );
        Ok(schemas)
    }
}

#[derive(Debug, Default)]
struct HarvestStats {
    definitions: usize,
    inserted: usize,
    repeated: usize,
    collided: usize,
}

impl HarvestStats {
    fn record(&mut self, offer: Offer) {
        match offer {
            Offer::Inserted => self.inserted += 1,
            Offer::Repeated => self.repeated += 1,
            Offer::Collided => self.collided += 1,
        }
    }
}
