//! Resolving a request path and method to a documented operation.

pub mod template;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::error::ResolveError;
use crate::link::decode_segment;
use crate::parse::HttpMethod;
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::ParameterOrRef;
use crate::parse::spec::OpenApiDocument;

pub use template::{PathTemplate, TemplateSegment};

/// An operation found for a request path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOperation<'a> {
    /// The declared template, e.g. `/pets/{petId}`, not the request path.
    pub template_path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Operation,
    /// Values captured by placeholders. Empty on an exact match.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub path_params: IndexMap<String, String>,
    #[serde(skip)]
    pub path_item: &'a PathItem,
}

impl<'a> ResolvedOperation<'a> {
    /// Path-level parameters merged with the operation's own. An operation
    /// parameter replaces a path-level one with the same name and location.
    pub fn parameters(&self) -> Vec<&'a ParameterOrRef> {
        let operation: &'a Operation = self.operation;
        let path_item: &'a PathItem = self.path_item;
        let own = &operation.parameters;
        let overrides = |inherited: &ParameterOrRef| {
            let inherited = inherited.as_parameter()?;
            own.iter().find(|p| {
                p.as_parameter().is_some_and(|p| {
                    p.name == inherited.name && p.location == inherited.location
                })
            })
        };

        let mut merged: Vec<&'a ParameterOrRef> = Vec::new();
        for inherited in &path_item.parameters {
            merged.push(overrides(inherited).unwrap_or(inherited));
        }
        for param in own {
            if !merged.iter().any(|m| std::ptr::eq(*m, param)) {
                merged.push(param);
            }
        }
        merged
    }
}

/// Find the operation for already-decoded path segments and a method token.
///
/// An exact key match wins over placeholder matches. Otherwise templates are
/// tried in declaration order and the first match is taken, even when a later
/// template would also match. The method is compared case-insensitively and
/// never falls through to another template.
pub fn resolve_operation<'a, S: AsRef<str>>(
    doc: &'a OpenApiDocument,
    segments: &[S],
    method: &str,
) -> Result<ResolvedOperation<'a>, ResolveError> {
    let candidate = candidate_path(segments);
    let Some((template_path, path_item, path_params)) = find_path(doc, segments, &candidate)
    else {
        return Err(ResolveError::PathNotFound { path: candidate });
    };

    let found = method
        .parse::<HttpMethod>()
        .ok()
        .and_then(|m| path_item.operation(m).map(|op| (m, op)));
    let Some((method, operation)) = found else {
        return Err(ResolveError::MethodNotAllowed {
            path: template_path.to_string(),
            method: method.to_ascii_lowercase(),
            allowed: path_item.methods(),
        });
    };

    Ok(ResolvedOperation {
        template_path,
        method,
        operation,
        path_params,
        path_item,
    })
}

/// Like [`resolve_operation`], for segments still percent-encoded. Each
/// segment is decoded on its own before matching.
pub fn resolve_encoded<'a, S: AsRef<str>>(
    doc: &'a OpenApiDocument,
    raw_segments: &[S],
    method: &str,
) -> Result<ResolvedOperation<'a>, ResolveError> {
    let decoded = raw_segments
        .iter()
        .map(|s| decode_segment(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    resolve_operation(doc, &decoded, method)
}

/// Resolve a documentation route of the form `<segments...>/<method>`, with
/// encoded segments.
pub fn resolve_route<'a, S: AsRef<str>>(
    doc: &'a OpenApiDocument,
    route: &[S],
) -> Result<ResolvedOperation<'a>, ResolveError> {
    let Some((method, path)) = route.split_last() else {
        return Err(ResolveError::MissingMethod);
    };
    let resolved = resolve_encoded(doc, path, method.as_ref())?;
    debug!(
        "route {} {} resolved to {} {}",
        method.as_ref(),
        candidate_path(path),
        resolved.method,
        resolved.template_path
    );
    Ok(resolved)
}

fn candidate_path<S: AsRef<str>>(segments: &[S]) -> String {
    let joined: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    format!("/{}", joined.join("/"))
}

fn find_path<'a, S: AsRef<str>>(
    doc: &'a OpenApiDocument,
    segments: &[S],
    candidate: &str,
) -> Option<(&'a str, &'a PathItem, IndexMap<String, String>)> {
    // A decoded `/` inside a segment is data, not a separator, so the joined
    // candidate cannot be compared to keys.
    let has_embedded_slash = segments.iter().any(|s| s.as_ref().contains('/'));
    if !has_embedded_slash {
        if let Some((key, item)) = doc.paths.get_key_value(candidate) {
            return Some((key.as_str(), item, IndexMap::new()));
        }
    }

    doc.paths.iter().find_map(|(key, item)| {
        let params = PathTemplate::parse(key).captures(segments)?;
        debug!("{} matched path template {}", candidate, key);
        Some((key.as_str(), item, params))
    })
}
