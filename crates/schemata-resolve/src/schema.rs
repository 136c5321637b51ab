use serde::Serialize;

/// The schema type a primitive maps onto in the generated documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Integer,
    Number,
    Boolean,
    String,
    /// Not a primitive; the name is passed through untouched.
    #[serde(untagged)]
    Custom(String),
}

/// Canonical schema of a primitive type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PrimitiveSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl PrimitiveSchema {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            format: None,
        }
    }

    pub fn with_format(schema_type: SchemaType, format: impl Into<String>) -> Self {
        Self {
            schema_type,
            format: Some(format.into()),
        }
    }
}

/// A schema precomputed during harvesting for `type X <primitive>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSchema {
    /// Package path owning the declaration.
    pub package_path: String,
    /// Short name declared by the declaring file.
    pub package_name: String,
    pub schema: PrimitiveSchema,
}
