use crate::file::ParsedFile;
use fxhash::FxHashMap;

/// A stable handle to a registered source unit.
///
/// Ids are assigned per file path; registering the same path again reuses
/// the existing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub usize);

/// One registered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    id: UnitId,
    file_path: String,
    package_path: String,
    file: ParsedFile,
}

impl SourceUnit {
    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// The import path of the package owning this file. Empty for
    /// standalone files that belong to no package.
    pub fn package_path(&self) -> &str {
        &self.package_path
    }

    /// The package short name the file declares.
    pub fn package_name(&self) -> &str {
        &self.file.package_name
    }

    pub fn file(&self) -> &ParsedFile {
        &self.file
    }
}

/// Outcome of inserting a unit into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: UnitId,
    /// The package path the file was registered under before, if the file
    /// path had been seen already.
    pub previous_package: Option<String>,
}

/// Owns every parsed file handed over by the host.
///
/// Units are keyed by file path. Iteration order is unspecified and callers
/// must not rely on it.
#[derive(Debug, Clone, Default)]
pub struct SourceStore {
    units: Vec<SourceUnit>,
    by_path: FxHashMap<String, UnitId>,
}

impl SourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the unit for `file_path`.
    pub fn insert(
        &mut self,
        file_path: impl Into<String>,
        package_path: impl Into<String>,
        file: ParsedFile,
    ) -> Registration {
        let file_path = file_path.into();
        let package_path = package_path.into();

        if let Some(&id) = self.by_path.get(&file_path) {
            let slot = &mut self.units[id.0];
            let previous = std::mem::replace(&mut slot.package_path, package_path);
            slot.file = file;
            log::debug!("Replaced source unit {:?} at '{}'", id, file_path);
            return Registration {
                id,
                previous_package: Some(previous),
            };
        }

        let id = UnitId(self.units.len());
        log::debug!(
            "Registered source unit {:?} at '{}' (package path '{}')",
            id,
            file_path,
            package_path
        );
        self.by_path.insert(file_path.clone(), id);
        self.units.push(SourceUnit {
            id,
            file_path,
            package_path,
            file,
        });
        Registration {
            id,
            previous_package: None,
        }
    }

    pub fn get(&self, id: UnitId) -> Option<&SourceUnit> {
        self.units.get(id.0)
    }

    pub fn get_by_path(&self, file_path: &str) -> Option<&SourceUnit> {
        self.by_path.get(file_path).and_then(|id| self.get(*id))
    }

    /// Lazily iterate over `(file path, unit)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceUnit)> {
        self.units.iter().map(|unit| (unit.file_path(), unit))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::TypeExpr;
    use expect_test::expect;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = SourceStore::new();
        let a = store.insert("a.go", "app/a", ParsedFile::new("a"));
        let b = store.insert("b.go", "app/b", ParsedFile::new("b"));

        assert_eq!(a.id, UnitId(0));
        assert_eq!(b.id, UnitId(1));
        assert_eq!(a.previous_package, None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reinsert_overwrites_in_place() {
        let mut store = SourceStore::new();
        store.insert("a.go", "app/a", ParsedFile::new("a"));
        let again = store.insert(
            "a.go",
            "app/other",
            ParsedFile::new("other").with_type("T", TypeExpr::named("U")),
        );

        assert_eq!(again.id, UnitId(0));
        assert_eq!(again.previous_package.as_deref(), Some("app/a"));
        assert_eq!(store.len(), 1);

        let unit = store.get_by_path("a.go").unwrap();
        assert_eq!(unit.package_path(), "app/other");
        assert_eq!(unit.package_name(), "other");
        assert_eq!(unit.file().type_decls().count(), 1);
    }

    #[test]
    fn test_iter_yields_every_unit() {
        let mut store = SourceStore::new();
        store.insert("a.go", "app/a", ParsedFile::new("a"));
        store.insert("main.go", "", ParsedFile::new("main"));

        let mut paths: Vec<_> = store.iter().map(|(path, _)| path).collect();
        paths.sort();
        assert_eq!(paths, vec!["a.go", "main.go"]);
    }

    #[test]
    fn test_unit_debug_rendering() {
        let mut store = SourceStore::new();
        let reg = store.insert(
            "models/user.go",
            "app/models",
            ParsedFile::new("models").with_type("ID", TypeExpr::primitive("int64")),
        );

        expect![[r#"
            SourceUnit {
                id: UnitId(
                    0,
                ),
                file_path: "models/user.go",
                package_path: "app/models",
                file: ParsedFile {
                    package_name: "models",
                    imports: [],
                    decls: [
                        Type(
                            TypeDecl {
                                name: "ID",
                                ty: Primitive(
                                    "int64",
                                ),
                            },
                        ),
                    ],
                },
            }
        "#]]
        .assert_debug_eq(store.get(reg.id).unwrap());
    }
}
