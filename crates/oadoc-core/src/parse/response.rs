use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::lenient;
use super::media_type::MediaType;

/// A response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,

    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::filtered_map"
    )]
    pub content: IndexMap<String, MediaType>,
}

/// A reference or inline response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Response(Response),
}

impl ResponseOrRef {
    pub fn description(&self) -> Option<&str> {
        match self {
            ResponseOrRef::Response(r) => Some(&r.description),
            ResponseOrRef::Ref { .. } => None,
        }
    }
}
