// Named type declarations discovered by the harvest pass, and the keys used
// to find them in the ambiguous-name index.

use std::fmt;
use std::hash::{Hash, Hasher};
use schemata_source::{TypeExpr, UnitId};

/// One named type declaration.
///
/// Identity is `(package_path, name)`: two definitions compare equal when
/// they are declared under the same name in the same package, whichever
/// file they came from.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    /// Import path of the owning package.
    pub package_path: String,
    /// Short name declared by the declaring file.
    pub package_name: String,
    /// The declaring unit. Follow it through the registry's store; the
    /// definition does not own the unit.
    pub unit: UnitId,
    pub name: String,
    /// The underlying type expression (`type <name> <underlying>`).
    pub underlying: TypeExpr,
}

impl TypeDefinition {
    /// The ambiguous `short.Name` rendering of this definition, joined with
    /// `separator`.
    pub fn full_name(&self, separator: char) -> AmbiguousKey {
        AmbiguousKey::joined(&self.package_name, &self.name, separator)
    }
}

impl PartialEq for TypeDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.package_path == other.package_path && self.name == other.name
    }
}

impl Eq for TypeDefinition {}

impl Hash for TypeDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.package_path.hash(state);
        self.name.hash(state);
    }
}

/// Key of the ambiguous-name index: `short.Name`.
///
/// Distinct import paths may share a short name, so a key does not
/// identify a package. It only serves as a shortcut for unqualified lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AmbiguousKey(String);

impl AmbiguousKey {
    /// Build the `short.Name` key for `name` declared in a package whose
    /// short name is `package_name`.
    pub fn new(package_name: &str, name: &str) -> Self {
        Self::joined(package_name, name, '.')
    }

    /// Like `new`, with a caller-chosen separator. An empty short name
    /// yields the bare name.
    pub fn joined(package_name: &str, name: &str, separator: char) -> Self {
        if package_name.is_empty() {
            AmbiguousKey(name.to_string())
        } else {
            AmbiguousKey(format!("{}{}{}", package_name, separator, name))
        }
    }

    /// Wrap a string the caller already rendered as a key.
    pub fn literal(key: impl Into<String>) -> Self {
        AmbiguousKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AmbiguousKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
