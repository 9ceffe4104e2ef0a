use serde::Serialize;

use crate::index::{TagIndex, TaggedOperation};

/// A search result and the tag bucket it was found under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub tag: &'a str,
    #[serde(flatten)]
    pub entry: TaggedOperation<'a>,
}

/// Case-insensitive substring search over path, method, summary,
/// description and tag. A blank query finds nothing.
///
/// Results follow index order, so an operation listed under two tags can
/// match twice.
pub fn search<'a>(index: &TagIndex<'a>, query: &str) -> Vec<SearchHit<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();

    let mut hits = Vec::new();
    for (tag, entries) in index.iter() {
        for entry in entries {
            if is_match(tag, entry, &query) {
                hits.push(SearchHit { tag, entry: *entry });
            }
        }
    }
    hits
}

fn is_match(tag: &str, entry: &TaggedOperation<'_>, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);
    contains(entry.path)
        || contains(entry.method.as_str())
        || entry.operation.summary.as_deref().is_some_and(contains)
        || entry.operation.description.as_deref().is_some_and(contains)
        || contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_tag_index;
    use crate::parse::HttpMethod;
    use crate::parse::parse_document;
    use serde_json::json;

    fn sample() -> crate::parse::spec::OpenApiDocument {
        parse_document(&json!({
            "openapi": "3.0.0",
            "info": {"title": "t", "version": "1"},
            "paths": {
                "/users": {
                    "get": {"summary": "List all users", "tags": ["users"], "responses": {}},
                    "post": {"summary": "Create a user", "tags": ["users", "admin"], "responses": {}},
                },
                "/health": {
                    "get": {"description": "Liveness PROBE", "responses": {}},
                },
            },
        }))
        .unwrap()
    }

    #[test]
    fn test_blank_query_finds_nothing() {
        let doc = sample();
        let index = build_tag_index(&doc);
        assert!(search(&index, "").is_empty());
        assert!(search(&index, "   ").is_empty());
    }

    #[test]
    fn test_matches_fields_case_insensitively() {
        let doc = sample();
        let index = build_tag_index(&doc);

        let hits = search(&index, "probe");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.path, "/health");
        assert_eq!(hits[0].tag, "untagged");

        let hits = search(&index, "POST");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.entry.method == HttpMethod::Post));
        let tags: Vec<_> = hits.iter().map(|h| h.tag).collect();
        assert_eq!(tags, vec!["users", "admin"]);
    }

    #[test]
    fn test_matches_tag_name() {
        let doc = sample();
        let index = build_tag_index(&doc);
        let hits = search(&index, "admin");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.operation.summary.as_deref(), Some("Create a user"));
    }

    #[test]
    fn test_serialized_hit_is_flat() {
        let doc = sample();
        let index = build_tag_index(&doc);
        let hits = search(&index, "health");
        let value = serde_json::to_value(&hits[0]).unwrap();
        assert_eq!(value["tag"], "untagged");
        assert_eq!(value["path"], "/health");
        assert_eq!(value["method"], "get");
    }
}
