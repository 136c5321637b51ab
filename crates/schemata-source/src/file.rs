/// The result of parsing one source file, as supplied by the host.
///
/// Only what name resolution needs is kept: the declared package name, the
/// imports in source order and the top-level declarations in source order.
///
/// # Example
///
/// ```rust
/// use schemata_source::{Import, ParsedFile, TypeExpr};
///
/// let file = ParsedFile::new("handlers")
///     .with_import(Import::inferred("app/models"))
///     .with_type("Request", TypeExpr::qualified("models", "User"));
///
/// assert_eq!(file.package_name, "handlers");
/// assert_eq!(file.type_decls().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedFile {
    /// The package short name declared by the file (`package models`).
    pub package_name: String,
    /// Imports in the order they appear in the file.
    pub imports: Vec<Import>,
    /// Top-level declarations in the order they appear in the file.
    pub decls: Vec<Declaration>,
}

impl ParsedFile {
    /// Create an empty file declaring `package_name`.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            imports: Vec::new(),
            decls: Vec::new(),
        }
    }

    /// Append an import.
    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Append a type declaration `type <name> <ty>`.
    pub fn with_type(mut self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.decls.push(Declaration::Type(TypeDecl {
            name: name.into(),
            ty,
        }));
        self
    }

    /// Append an arbitrary declaration.
    pub fn with_decl(mut self, decl: Declaration) -> Self {
        self.decls.push(decl);
        self
    }

    /// Iterate over the type declarations, skipping everything else.
    pub fn type_decls(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Declaration::Type(type_decl) => Some(type_decl),
            Declaration::Other => None,
        })
    }
}

/// How an import binds its package into the importing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportName {
    /// No alias; the package is referred to by its declared short name.
    Inferred,
    /// An explicit alias (`import m "app/models"`).
    Alias(String),
    /// A blank import kept for side effects only (`import _ "app/models"`).
    Blank,
    /// A dot-import merging the package's names into the file scope
    /// (`import . "app/models"`).
    Dot,
}

impl ImportName {
    /// Classify the textual alias a parser reports for an import.
    pub fn from_alias(alias: Option<&str>) -> Self {
        match alias {
            None => ImportName::Inferred,
            Some("_") => ImportName::Blank,
            Some(".") => ImportName::Dot,
            Some(name) => ImportName::Alias(name.to_string()),
        }
    }

    /// The alias exactly as it would appear in source, if any.
    pub fn as_alias(&self) -> Option<&str> {
        match self {
            ImportName::Inferred => None,
            ImportName::Alias(name) => Some(name.as_str()),
            ImportName::Blank => Some("_"),
            ImportName::Dot => Some("."),
        }
    }
}

/// One import declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    pub name: ImportName,
    /// The import path as written, possibly still quoted.
    pub raw_path: String,
}

impl Import {
    pub fn new(name: ImportName, raw_path: impl Into<String>) -> Self {
        Self {
            name,
            raw_path: raw_path.into(),
        }
    }

    /// `import "path"`
    pub fn inferred(raw_path: impl Into<String>) -> Self {
        Self::new(ImportName::Inferred, raw_path)
    }

    /// `import alias "path"`
    pub fn aliased(alias: impl Into<String>, raw_path: impl Into<String>) -> Self {
        let alias: String = alias.into();
        Self::new(ImportName::from_alias(Some(alias.as_str())), raw_path)
    }

    /// `import _ "path"`
    pub fn blank(raw_path: impl Into<String>) -> Self {
        Self::new(ImportName::Blank, raw_path)
    }

    /// `import . "path"`
    pub fn dot(raw_path: impl Into<String>) -> Self {
        Self::new(ImportName::Dot, raw_path)
    }

    /// The import path with surrounding quotes removed.
    pub fn path(&self) -> &str {
        self.raw_path.trim_matches(|c: char| c == '"' || c == '`')
    }

    pub fn is_anonymous(&self) -> bool {
        self.name == ImportName::Blank
    }

    pub fn is_dot(&self) -> bool {
        self.name == ImportName::Dot
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Type(TypeDecl),
    /// Functions, variables, constants and anything else the registry ignores.
    Other,
}

/// `type <name> <ty>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDecl {
    pub name: String,
    pub ty: TypeExpr,
}

/// The underlying type expression of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// An identifier the parser already recognised as a built-in type.
    Primitive(String),
    /// A bare identifier (`User`).
    Named(String),
    /// A package-qualified identifier (`models.User`).
    Qualified { qualifier: String, name: String },
    /// Structs, maps, slices, functions and so on, kept as source text.
    Other(String),
}

impl TypeExpr {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeExpr::Primitive(name.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Qualified {
            qualifier: qualifier.into(),
            name: name.into(),
        }
    }

    pub fn other(text: impl Into<String>) -> Self {
        TypeExpr::Other(text.into())
    }

    /// The identifier if this expression is a single unqualified name.
    pub fn bare_ident(&self) -> Option<&str> {
        match self {
            TypeExpr::Primitive(name) | TypeExpr::Named(name) => Some(name.as_str()),
            TypeExpr::Qualified { .. } | TypeExpr::Other(_) => None,
        }
    }
}
