use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Path => "path",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

/// An API parameter. `schema` and `example` are kept as opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub required: bool,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub deprecated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl Parameter {
    /// Path parameters are always required, whatever `required` says.
    pub fn is_required(&self) -> bool {
        self.required || self.location == ParameterLocation::Path
    }
}

/// A reference or inline parameter. References are kept unresolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Parameter),
}

impl ParameterOrRef {
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            ParameterOrRef::Parameter(p) => Some(p),
            ParameterOrRef::Ref { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_parameter_is_implicitly_required() {
        let p: Parameter =
            serde_json::from_value(json!({"name": "petId", "in": "path"})).unwrap();
        assert!(!p.required);
        assert!(p.is_required());

        let q: Parameter =
            serde_json::from_value(json!({"name": "limit", "in": "query"})).unwrap();
        assert!(!q.is_required());
    }

    #[test]
    fn test_reference_is_kept() {
        let p: ParameterOrRef =
            serde_json::from_value(json!({"$ref": "#/components/parameters/Limit"})).unwrap();
        assert_eq!(
            p,
            ParameterOrRef::Ref {
                ref_path: "#/components/parameters/Limit".to_string()
            }
        );
        assert!(p.as_parameter().is_none());
    }

    #[test]
    fn test_opaque_schema() {
        let p: Parameter = serde_json::from_value(json!({
            "name": "limit",
            "in": "query",
            "schema": {"type": "integer", "format": "int32", "default": 20},
            "example": 10,
        }))
        .unwrap();
        assert_eq!(p.schema.unwrap()["default"], 20);
        assert_eq!(p.example, Some(json!(10)));
    }
}
