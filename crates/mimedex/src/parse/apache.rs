use crate::models::{SourceRecord, SourceResponse};

use super::{ParseOutcome, finish_source};

/// Apache httpd `mime.types` format: one MIME type per line, separated
/// from its extension list by tabs, extensions separated by whitespace.
/// Freshness token is the entity tag.
pub fn parse_apache(response: &SourceResponse) -> Option<SourceRecord> {
    finish_source("apache", response.etag(), parse_type_map(response.body()))
}

/// Debian's `/etc/mime.types` export shares the Apache line format.
pub fn parse_debian(response: &SourceResponse) -> Option<SourceRecord> {
    finish_source("debian", response.etag(), parse_type_map(response.body()))
}

fn parse_type_map(raw: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t').filter(|field| !field.is_empty());
        let Some(type_field) = fields.next() else {
            continue;
        };
        // A type with no extension column is normal in these files.
        let Some(extension_field) = fields.next() else {
            continue;
        };

        let mime_type = type_field.trim().to_lowercase();
        let extensions: Vec<String> = extension_field
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if !mime_type.is_empty() && !extensions.is_empty() {
            // A type repeated on a later line replaces the earlier list.
            outcome.content.insert(mime_type, extensions);
        }
    }

    outcome
}
