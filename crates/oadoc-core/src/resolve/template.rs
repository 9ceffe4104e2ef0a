use indexmap::IndexMap;

/// One `/`-separated piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSegment<'a> {
    /// Matched byte-for-byte.
    Literal(&'a str),
    /// `{name}` filling the whole segment; matches any non-empty value
    /// without a `/`.
    Param(&'a str),
}

impl<'a> TemplateSegment<'a> {
    fn parse(segment: &'a str) -> Self {
        let inner = segment
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'));
        match inner {
            Some(name) if !name.is_empty() && !name.contains(['{', '}']) => {
                TemplateSegment::Param(name)
            }
            _ => TemplateSegment::Literal(segment),
        }
    }
}

/// A path template such as `/pets/{petId}`, split into segments.
///
/// A segment mixing text and placeholders (`v{major}`, `{a}.{b}`) is kept as
/// a literal and only ever matches itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate<'a> {
    raw: &'a str,
    segments: Vec<TemplateSegment<'a>>,
}

impl<'a> PathTemplate<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.strip_prefix('/').unwrap_or(raw);
        let segments = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').map(TemplateSegment::parse).collect()
        };
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[TemplateSegment<'a>] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Param(name) => Some(*name),
            TemplateSegment::Literal(_) => None,
        })
    }

    pub fn has_params(&self) -> bool {
        self.param_names().next().is_some()
    }

    /// Match decoded request segments against the template, returning the
    /// value captured for each placeholder.
    pub fn captures<S: AsRef<str>>(&self, segments: &[S]) -> Option<IndexMap<String, String>> {
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = IndexMap::new();
        for (expected, actual) in self.segments.iter().zip(segments) {
            let actual = actual.as_ref();
            match expected {
                TemplateSegment::Literal(literal) => {
                    if *literal != actual {
                        return None;
                    }
                }
                TemplateSegment::Param(name) => {
                    if actual.is_empty() || actual.contains('/') {
                        return None;
                    }
                    params.insert((*name).to_string(), actual.to_string());
                }
            }
        }
        Some(params)
    }

    pub fn matches<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.captures(segments).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let t = PathTemplate::parse("/users/{userId}/posts");
        assert_eq!(
            t.segments(),
            &[
                TemplateSegment::Literal("users"),
                TemplateSegment::Param("userId"),
                TemplateSegment::Literal("posts"),
            ]
        );
        assert_eq!(t.param_names().collect::<Vec<_>>(), vec!["userId"]);
        assert!(t.has_params());
    }

    #[test]
    fn test_root_and_trailing_slash() {
        assert!(PathTemplate::parse("/").segments().is_empty());
        assert_eq!(
            PathTemplate::parse("/pets/").segments(),
            &[TemplateSegment::Literal("pets"), TemplateSegment::Literal("")]
        );
    }

    #[test]
    fn test_mixed_segments_are_literal() {
        let t = PathTemplate::parse("/files/{name}.{ext}/v{major}/{}");
        assert!(!t.has_params());
        assert!(!t.matches(&["files", "report.pdf", "v2", "x"]));
        assert!(t.matches(&["files", "{name}.{ext}", "v{major}", "{}"]));
    }

    #[test]
    fn test_captures() {
        let t = PathTemplate::parse("/books/{id}/pages/{page}");
        let params = t.captures(&["books", "42", "pages", "7"]).unwrap();
        assert_eq!(params["id"], "42");
        assert_eq!(params["page"], "7");
    }

    #[test]
    fn test_segment_count_must_match() {
        let t = PathTemplate::parse("/books/{id}");
        assert!(!t.matches(&["books"]));
        assert!(!t.matches(&["books", "42", "extra"]));
    }

    #[test]
    fn test_param_rejects_empty_and_slash() {
        let t = PathTemplate::parse("/books/{id}");
        assert!(!t.matches(&["books", ""]));
        assert!(!t.matches(&["books", "a/b"]));
        assert!(t.matches(&["books", "a b"]));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let t = PathTemplate::parse("/v1.0/items+all");
        assert!(t.matches(&["v1.0", "items+all"]));
        assert!(!t.matches(&["v1x0", "itemsall"]));
    }
}
