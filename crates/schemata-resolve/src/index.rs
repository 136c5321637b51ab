//! The ambiguous-name index.
//!
//! A best-effort shortcut from `short.Name` to a definition. Package records
//! stay authoritative; this index only answers quickly when the answer is
//! unique. When two packages with different paths claim the same key, the
//! key is dropped and neither of them keeps the shortcut. A dropped key is
//! free again: the next package declaring it takes it over.

use std::sync::Arc;
use fxhash::FxHashMap;
use crate::definitions::{AmbiguousKey, TypeDefinition};

/// What `AmbiguousIndex::offer` did with a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// The key was free; the definition now owns it.
    Inserted,
    /// The key already pointed at the same package; nothing changed.
    Repeated,
    /// The key pointed at another package and was removed.
    Collided,
}

#[derive(Debug, Clone, Default)]
pub struct AmbiguousIndex {
    entries: FxHashMap<AmbiguousKey, Arc<TypeDefinition>>,
}

impl AmbiguousIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `def` for `key`, applying the collision rules.
    pub fn offer(&mut self, key: AmbiguousKey, def: &Arc<TypeDefinition>) -> Offer {
        match self.entries.get(&key) {
            None => {
                self.entries.insert(key, Arc::clone(def));
                Offer::Inserted
            }
            Some(existing) if existing.package_path == def.package_path => Offer::Repeated,
            Some(existing) => {
                log::debug!(
                    "Dropping ambiguous shortcut `{}`: declared in both '{}' and '{}'",
                    key,
                    existing.package_path,
                    def.package_path
                );
                self.entries.remove(&key);
                Offer::Collided
            }
        }
    }

    pub fn get(&self, key: &AmbiguousKey) -> Option<&TypeDefinition> {
        self.entries.get(key).map(|def| def.as_ref())
    }

    pub fn contains(&self, key: &AmbiguousKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
