use crate::models::{SourceRecord, SourceResponse};

use super::{ParseOutcome, finish_source};

/// NGINX `mime.types` format: a `types { ... }` block of
/// `type ext ext...;` statements. A malformed statement is skipped and
/// counted rather than failing the whole parse; a source with nothing but
/// malformed statements still reports failure. Freshness token is the
/// entity tag.
pub fn parse_nginx(response: &SourceResponse) -> Option<SourceRecord> {
    finish_source("nginx", response.etag(), parse_types_block(response.body()))
}

fn parse_types_block(raw: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (statement_no, statement) in block_body(raw).split(';').enumerate() {
        let statement = statement.trim();
        if statement.is_empty() || statement.starts_with('#') {
            continue;
        }

        let Some((type_field, extension_field)) = statement.split_once(char::is_whitespace)
        else {
            outcome.skip(
                statement_no + 1,
                format!("expected `<type> <extensions>`: {statement}"),
            );
            continue;
        };

        let mime_type = type_field.trim().to_lowercase();
        let extensions: Vec<String> = extension_field
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if !mime_type.is_empty() && !extensions.is_empty() {
            outcome.content.insert(mime_type, extensions);
        }
    }

    outcome
}

/// Strips the enclosing `types { ... }` markers (keyword match is
/// case-insensitive). Text without the wrapper is taken as-is.
fn block_body(raw: &str) -> &str {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();

    let mut search = 0;
    while let Some(found) = lower[search..].find("types") {
        let at = search + found;
        let tail = &trimmed[at + "types".len()..];
        if let Some(body) = tail.trim_start().strip_prefix('{') {
            return match body.rfind('}') {
                Some(close) => &body[..close],
                None => body,
            };
        }
        search = at + "types".len();
    }

    trimmed
}
