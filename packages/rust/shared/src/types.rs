//! Blueprint catalog types as exposed by the simulator.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BlueprintLibrary
// ---------------------------------------------------------------------------

/// Body of a catalog response (and of a catalog snapshot file).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlueprintLibrary {
    #[serde(default)]
    pub blueprints: Vec<BlueprintRecord>,
}

// ---------------------------------------------------------------------------
// BlueprintRecord
// ---------------------------------------------------------------------------

/// A single actor template, e.g. `vehicle.audi.tt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintRecord {
    /// Dot-delimited identifier; the first segment is the category.
    pub id: String,
    /// Attributes in provider order.
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
}

impl BlueprintRecord {
    pub fn new(id: impl Into<String>, attributes: Vec<AttributeDescriptor>) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    /// Category of this blueprint: everything before the first `.`.
    ///
    /// An identifier without a `.` is its own category.
    pub fn category(&self) -> &str {
        self.id.split('.').next().unwrap_or(&self.id)
    }
}

// ---------------------------------------------------------------------------
// AttributeDescriptor
// ---------------------------------------------------------------------------

/// A named, typed blueprint attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    #[serde(default)]
    pub is_modifiable: bool,
}

impl AttributeDescriptor {
    pub fn new(id: impl Into<String>, kind: AttributeType, is_modifiable: bool) -> Self {
        Self {
            id: id.into(),
            kind,
            is_modifiable,
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeType
// ---------------------------------------------------------------------------

/// Attribute type tag. Unknown tags are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeType {
    Bool,
    Int,
    Float,
    String,
    RgbColor,
    Other(std::string::String),
}

impl AttributeType {
    /// The tag as the simulator spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::RgbColor => "RGBColor",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<std::string::String> for AttributeType {
    fn from(tag: std::string::String) -> Self {
        match tag.as_str() {
            "bool" => Self::Bool,
            "int" => Self::Int,
            "float" => Self::Float,
            "string" => Self::String,
            "RGBColor" => Self::RgbColor,
            _ => Self::Other(tag),
        }
    }
}

impl From<AttributeType> for std::string::String {
    fn from(kind: AttributeType) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_first_segment() {
        let bp = BlueprintRecord::new("vehicle.audi.tt", vec![]);
        assert_eq!(bp.category(), "vehicle");

        let bp = BlueprintRecord::new("walker.pedestrian.0001", vec![]);
        assert_eq!(bp.category(), "walker");
    }

    #[test]
    fn category_without_delimiter_is_whole_id() {
        let bp = BlueprintRecord::new("spectator", vec![]);
        assert_eq!(bp.category(), "spectator");
    }

    #[test]
    fn attribute_type_display_matches_wire_tag() {
        assert_eq!(AttributeType::Float.to_string(), "float");
        assert_eq!(AttributeType::RgbColor.to_string(), "RGBColor");
        assert_eq!(AttributeType::from("enum".to_string()).to_string(), "enum");
    }

    #[test]
    fn library_deserializes_from_catalog_json() {
        let json = r#"{
            "blueprints": [
                {
                    "id": "walker.pedestrian.0001",
                    "attributes": [
                        {"id": "speed", "type": "float", "is_modifiable": true},
                        {"id": "role_name", "type": "string"}
                    ]
                },
                {"id": "static.prop.box"}
            ]
        }"#;

        let library: BlueprintLibrary = serde_json::from_str(json).expect("deserialize");
        assert_eq!(library.blueprints.len(), 2);

        let walker = &library.blueprints[0];
        assert_eq!(walker.attributes[0].kind, AttributeType::Float);
        assert!(walker.attributes[0].is_modifiable);
        assert!(!walker.attributes[1].is_modifiable);
        assert!(library.blueprints[1].attributes.is_empty());
    }

    #[test]
    fn attribute_serializes_type_tag() {
        let attr = AttributeDescriptor::new("color", AttributeType::RgbColor, true);
        let json = serde_json::to_value(&attr).expect("serialize");
        assert_eq!(json["type"], "RGBColor");
        assert_eq!(json["is_modifiable"], true);
    }
}
