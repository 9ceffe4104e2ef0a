//! Endpoint links: each path segment is percent-encoded on its own, so that
//! an encoded `/` inside a value never turns into a separator.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::ResolveError;
use crate::parse::HttpMethod;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

pub fn decode_segment(segment: &str) -> Result<String, ResolveError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ResolveError::InvalidEncoding {
            segment: segment.to_string(),
        })
}

/// Split a URL path into its non-empty segments, without decoding them.
///
/// Empty segments are dropped, trailing ones included, so `/pets/` and `/pets`
/// split alike. A template declared with a trailing slash is only reachable by
/// passing the trailing empty segment to the resolver directly.
pub fn split_route(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// The encoded route segments for an endpoint: the template's segments
/// followed by the lower-case method.
pub fn endpoint_segments(template: &str, method: HttpMethod) -> Vec<String> {
    split_route(template)
        .into_iter()
        .map(encode_segment)
        .chain(std::iter::once(method.as_str().to_string()))
        .collect()
}

/// Link to an endpoint page, e.g. `/docs/pets/%7BpetId%7D/get`.
pub fn endpoint_href(prefix: &str, template: &str, method: HttpMethod) -> String {
    let prefix = prefix.trim_end_matches('/');
    format!("{}/{}", prefix, endpoint_segments(template, method).join("/"))
}
