//! Grouping operations by tag for navigation.

use indexmap::IndexMap;
use log::trace;
use serde::Serialize;

use crate::parse::HttpMethod;
use crate::parse::operation::Operation;
use crate::parse::spec::OpenApiDocument;

/// Bucket holding operations without tags. Always the last bucket.
pub const UNTAGGED: &str = "untagged";

/// One operation as listed under a tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaggedOperation<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Operation,
}

/// Operations grouped by tag, in navigation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TagIndex<'a> {
    buckets: IndexMap<&'a str, Vec<TaggedOperation<'a>>>,
}

impl<'a> TagIndex<'a> {
    pub fn get(&self, tag: &str) -> Option<&[TaggedOperation<'a>]> {
        self.buckets.get(tag).map(Vec::as_slice)
    }

    /// Every bucket, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[TaggedOperation<'a>])> + '_ {
        self.buckets
            .iter()
            .map(|(tag, entries)| (*tag, entries.as_slice()))
    }

    /// Buckets with at least one operation, as shown in a sidebar.
    pub fn non_empty(&self) -> impl Iterator<Item = (&'a str, &[TaggedOperation<'a>])> + '_ {
        self.iter().filter(|(_, entries)| !entries.is_empty())
    }

    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.buckets.keys().copied()
    }

    pub fn untagged(&self) -> &[TaggedOperation<'a>] {
        self.get(UNTAGGED).unwrap_or_default()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total entries across buckets. An operation with several tags counts
    /// once per tag.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Group every operation of the document by tag.
///
/// Buckets come in declared tag order, then in order of first use for tags
/// that were never declared, then [`UNTAGGED`]. Within a bucket, entries
/// follow path declaration order and canonical method order.
///
/// An operation that lists the same tag more than once is entered in that
/// bucket once. This differs on purpose from the hosted docs sidebar, which
/// pushed one entry per listed tag.
pub fn build_tag_index(doc: &OpenApiDocument) -> TagIndex<'_> {
    let mut buckets: IndexMap<&str, Vec<TaggedOperation<'_>>> = IndexMap::new();
    for tag in &doc.tags {
        if tag.name != UNTAGGED {
            buckets.entry(tag.name.as_str()).or_default();
        }
    }

    let mut untagged = Vec::new();
    for (path, method, operation) in doc.operations() {
        let entry = TaggedOperation {
            path,
            method,
            operation,
        };
        if operation.tags.is_empty() {
            untagged.push(entry);
            continue;
        }

        let mut seen: Vec<&str> = Vec::with_capacity(operation.tags.len());
        for tag in &operation.tags {
            let tag = tag.as_str();
            if seen.contains(&tag) {
                continue;
            }
            seen.push(tag);
            if tag == UNTAGGED {
                untagged.push(entry);
            } else {
                buckets.entry(tag).or_default().push(entry);
            }
        }
    }
    buckets.insert(UNTAGGED, untagged);

    trace!(
        "built tag index: {} buckets for {} paths",
        buckets.len(),
        doc.paths.len()
    );
    TagIndex { buckets }
}

/// Declared tags followed by tags only used on operations, without
/// duplicates.
pub fn tag_names(doc: &OpenApiDocument) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let declared = doc.tags.iter().map(|t| t.name.as_str());
    let used = doc
        .operations()
        .flat_map(|(_, _, op)| op.tags.iter().map(String::as_str));
    for name in declared.chain(used) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
