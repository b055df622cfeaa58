// Fallible APIs in this crate share one concrete error contract (`MimeError`).
// Per-function `# Errors` sections would restate it everywhere.
#![allow(
    clippy::missing_errors_doc,
    reason = "single crate-wide error type; per-item sections would duplicate the contract"
)]

pub mod error;
pub mod fetch;
pub mod models;
pub(crate) mod normalize;
pub mod parse;
pub mod registry;

pub use error::{MimeError, Result};
pub use models::{SourceRecord, SourceResponse, TypeMap};
pub use parse::{parse_apache, parse_debian, parse_iana, parse_nginx};
pub use registry::{ExtensionList, MimeRegistry};
