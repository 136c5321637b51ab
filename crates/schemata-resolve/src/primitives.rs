//! Classification of built-in type names.
//!
//! The registry never decides on its own what counts as a primitive; it asks
//! a `PrimitiveClassifier` supplied by the host. `GoPrimitives` is the stock
//! table for Go sources.

use crate::schema::{PrimitiveSchema, SchemaType};

/// Recognises built-in type names and maps them to canonical schemas.
pub trait PrimitiveClassifier {
    /// Whether `name` is a built-in type that needs no definition lookup.
    fn is_primitive(&self, name: &str) -> bool;

    /// The canonical schema for `name`.
    fn canonical_schema(&self, name: &str) -> PrimitiveSchema;
}

/// Built-in scalar types of Go.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoPrimitives;

impl GoPrimitives {
    pub const NAMES: &'static [&'static str] = &[
        "uint", "int", "uint8", "int8", "uint16", "int16", "byte", "uint32", "int32", "rune",
        "uint64", "int64", "float32", "float64", "bool", "string",
    ];
}

impl PrimitiveClassifier for GoPrimitives {
    fn is_primitive(&self, name: &str) -> bool {
        Self::NAMES.contains(&name)
    }

    fn canonical_schema(&self, name: &str) -> PrimitiveSchema {
        match name {
            "uint" | "int" | "uint8" | "int8" | "uint16" | "int16" | "byte" => {
                PrimitiveSchema::new(SchemaType::Integer)
            }
            "uint32" | "int32" | "rune" => PrimitiveSchema::with_format(SchemaType::Integer, "int32"),
            "uint64" | "int64" => PrimitiveSchema::with_format(SchemaType::Integer, "int64"),
            "float32" => PrimitiveSchema::with_format(SchemaType::Number, "float"),
            "float64" => PrimitiveSchema::with_format(SchemaType::Number, "double"),
            "bool" => PrimitiveSchema::new(SchemaType::Boolean),
            "string" => PrimitiveSchema::new(SchemaType::String),
            other => PrimitiveSchema::new(SchemaType::Custom(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_is_primitive() {
        for name in GoPrimitives::NAMES {
            assert!(GoPrimitives.is_primitive(name), "{name} should be primitive");
        }
        assert!(!GoPrimitives.is_primitive("User"));
        assert!(!GoPrimitives.is_primitive("error"));
        assert!(!GoPrimitives.is_primitive(""));
    }

    #[test]
    fn test_canonical_schemas() {
        assert_eq!(
            GoPrimitives.canonical_schema("int"),
            PrimitiveSchema::new(SchemaType::Integer)
        );
        assert_eq!(
            GoPrimitives.canonical_schema("rune"),
            PrimitiveSchema::with_format(SchemaType::Integer, "int32")
        );
        assert_eq!(
            GoPrimitives.canonical_schema("uint64"),
            PrimitiveSchema::with_format(SchemaType::Integer, "int64")
        );
        assert_eq!(
            GoPrimitives.canonical_schema("float64"),
            PrimitiveSchema::with_format(SchemaType::Number, "double")
        );
        assert_eq!(
            GoPrimitives.canonical_schema("bool"),
            PrimitiveSchema::new(SchemaType::Boolean)
        );
        assert_eq!(
            GoPrimitives.canonical_schema("string"),
            PrimitiveSchema::new(SchemaType::String)
        );
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(
            GoPrimitives.canonical_schema("Money"),
            PrimitiveSchema::new(SchemaType::Custom("Money".to_string()))
        );
    }
}
