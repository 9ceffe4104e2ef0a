use thiserror::Error;

use crate::parse::HttpMethod;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document is not an object")]
    NotAnObject,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid `{field}` field: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not parse document as JSON ({json}) or YAML ({yaml})")]
    UnrecognizedFormat {
        json: serde_json::Error,
        yaml: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no path template matches {path}")]
    PathNotFound { path: String },

    #[error("{path} has no {method} operation")]
    MethodNotAllowed {
        path: String,
        method: String,
        allowed: Vec<HttpMethod>,
    },

    #[error("path segment is not valid percent-encoded UTF-8: {segment}")]
    InvalidEncoding { segment: String },

    #[error("route has no method segment")]
    MissingMethod,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
