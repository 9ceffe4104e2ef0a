pub mod config;
pub mod error;
pub mod index;
pub mod link;
pub mod parse;
pub mod resolve;
pub mod search;

pub use error::{ParseError, ResolveError};
pub use index::{TagIndex, TaggedOperation, build_tag_index};
pub use parse::spec::OpenApiDocument;
pub use parse::{HttpMethod, parse_document};
pub use resolve::{ResolvedOperation, resolve_operation};
