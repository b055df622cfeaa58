use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from a lowercase MIME type to its ordered, duplicate-free list
/// of lowercase extensions. Insertion order is the lookup order.
pub type TypeMap = IndexMap<String, Vec<String>>;

/// One upstream source's contribution to the registry. `version` is an
/// opaque freshness token (entity tag or last-modified value) kept for
/// caller-side staleness decisions; the registry never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub version: Option<String>,
    pub content: TypeMap,
}

/// Raw body of a fetched upstream source plus the two response headers any
/// parser consults. Built by [`crate::fetch::SourceClient`] or directly by
/// callers that transport the fetch themselves.
#[derive(Debug, Clone)]
pub struct SourceResponse {
    body: String,
    etag: Option<String>,
    last_modified: Option<String>,
}

impl SourceResponse {
    #[must_use]
    pub fn new(
        body: impl Into<String>,
        etag: Option<String>,
        last_modified: Option<String>,
    ) -> Self {
        Self {
            body: body.into(),
            etag,
            last_modified,
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    #[must_use]
    pub fn last_modified(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }
}
