pub mod components;
mod lenient;
pub mod media_type;
pub mod method;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod security;
pub mod server;
pub mod spec;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ParseError;
pub use method::HttpMethod;
use spec::{Info, OpenApiDocument};

/// Validate a raw, already-decoded document value.
///
/// The check is shallow: the value must be an object carrying `openapi`,
/// `info` and `paths`. Optional fields are read leniently and left empty when
/// they are missing or malformed.
pub fn parse_document(raw: &Value) -> Result<OpenApiDocument, ParseError> {
    let Value::Object(fields) = raw else {
        return Err(ParseError::NotAnObject);
    };

    let openapi = required(fields, "openapi")?;
    let info = required(fields, "info")?;
    let paths = required(fields, "paths")?;

    Ok(OpenApiDocument {
        openapi: lenient::stringly(openapi).map_err(invalid("openapi"))?,
        info: Info::deserialize(info).map_err(invalid("info"))?,
        paths: lenient::values_or_default(paths).map_err(invalid("paths"))?,
        servers: optional(fields.get("servers"), lenient::filtered_vec),
        components: optional(fields.get("components"), lenient::or_default),
        tags: optional(fields.get("tags"), lenient::filtered_vec),
    })
}

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiDocument, ParseError> {
    let raw: Value = serde_yaml_ng::from_str(input)?;
    parse_document(&raw)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiDocument, ParseError> {
    let raw: Value = serde_json::from_str(input)?;
    parse_document(&raw)
}

/// Parse an OpenAPI document whose format is picked from the file name.
pub fn from_source(input: &str, file_name: Option<&str>) -> Result<OpenApiDocument, ParseError> {
    let raw = SourceFormat::detect(file_name).decode(input)?;
    parse_document(&raw)
}

/// Text format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    /// Unknown extension: try JSON, then YAML.
    Auto,
}

impl SourceFormat {
    pub fn detect(file_name: Option<&str>) -> Self {
        let Some(name) = file_name else {
            return SourceFormat::Auto;
        };
        let name = name.to_ascii_lowercase();
        if name.ends_with(".json") {
            SourceFormat::Json
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            SourceFormat::Yaml
        } else {
            SourceFormat::Auto
        }
    }

    /// Decode text into a raw value without validating it.
    pub fn decode(self, input: &str) -> Result<Value, ParseError> {
        match self {
            SourceFormat::Json => Ok(serde_json::from_str(input)?),
            SourceFormat::Yaml => Ok(serde_yaml_ng::from_str(input)?),
            SourceFormat::Auto => match serde_json::from_str(input) {
                Ok(value) => Ok(value),
                Err(json) => serde_yaml_ng::from_str(input)
                    .map_err(|yaml| ParseError::UnrecognizedFormat { json, yaml }),
            },
        }
    }
}

/// A required field; `null` counts as absent.
fn required<'a>(fields: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, ParseError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(ParseError::MissingField(name)),
        Some(value) => Ok(value),
    }
}

fn invalid(field: &'static str) -> impl FnOnce(serde_json::Error) -> ParseError {
    move |source| ParseError::InvalidField { field, source }
}

fn optional<'a, T, F>(value: Option<&'a Value>, read: F) -> T
where
    T: Default,
    F: FnOnce(&'a Value) -> Result<T, serde_json::Error>,
{
    value.and_then(|v| read(v).ok()).unwrap_or_default()
}
