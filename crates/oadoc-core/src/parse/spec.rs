use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::components::Components;
use super::lenient;
use super::method::HttpMethod;
use super::operation::{Operation, PathItem};
use super::server::Server;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, deserialize_with = "lenient::stringly_or_default")]
    pub title: String,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::stringly_or_default")]
    pub version: String,

    #[serde(
        rename = "termsOfService",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub terms_of_service: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub contact: Option<Contact>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub license: Option<License>,
}

/// Contact information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Tag declaration. The order of `OpenApiDocument::tags` is the canonical
/// navigation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A validated OpenAPI 3.x document.
///
/// Only `openapi`, `info` and `paths` are required. Everything else is read
/// leniently: a missing or malformed optional field is simply empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    #[serde(deserialize_with = "lenient::stringly")]
    pub openapi: String,

    pub info: Info,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "lenient::filtered_vec"
    )]
    pub servers: Vec<Server>,

    #[serde(deserialize_with = "lenient::values_or_default")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub components: Option<Components>,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "lenient::filtered_vec"
    )]
    pub tags: Vec<Tag>,
}

impl OpenApiDocument {
    /// Every `(template, method, operation)` triple, in path declaration order
    /// and canonical method order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, op)| (path.as_str(), method, op))
        })
    }

    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }
}
