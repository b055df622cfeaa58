use crate::models::{SourceRecord, SourceResponse};

use super::{ParseOutcome, finish_source};

/// IANA-style CSV registry export: a header row, then `extension,type[,...]`
/// rows. The direction is the inverse of the other sources, so extensions
/// accumulate per type with de-duplication. Rows whose extension field
/// carries an `obsolete`/`deprecate` marker are dropped; the marker check
/// applies to the extension column only. Freshness token is the
/// last-modified value.
pub fn parse_iana(response: &SourceResponse) -> Option<SourceRecord> {
    finish_source(
        "iana",
        response.last_modified(),
        parse_registry_csv(response.body()),
    )
}

fn parse_registry_csv(raw: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    let mut rows = raw.lines().map(str::trim).filter(|row| !row.is_empty());
    // The header row is never data.
    let _header = rows.next();

    for row in rows {
        if row.starts_with('#') {
            continue;
        }

        // Naive comma split, no quote handling.
        let mut fields = row.split(',');
        let Some(extension_field) = fields.next() else {
            continue;
        };
        let Some(type_field) = fields.next() else {
            continue;
        };

        let extension = extension_field.trim().to_lowercase();
        let mime_type = type_field.trim().to_lowercase();

        if extension.is_empty() || mime_type.is_empty() {
            continue;
        }
        if extension.contains("obsolete") || extension.contains("deprecate") {
            continue;
        }

        let known = outcome.content.entry(mime_type).or_insert_with(Vec::new);
        if !known.contains(&extension) {
            known.push(extension);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_accumulates_per_type() {
        let raw = "Name,Template,Reference\n\
                   foo,application/x-foo,[RFC0001]\n\
                   bar,application/x-foo,[RFC0002]\n\
                   foo,application/x-foo,[RFC0003]\n";
        let outcome = parse_registry_csv(raw);

        assert_eq!(outcome.content.len(), 1);
        assert_eq!(
            outcome.content["application/x-foo"],
            vec!["foo".to_string(), "bar".to_string()]
        );
    }

    #[test]
    fn drops_obsoleted_and_deprecated_extensions() {
        let raw = "Name,Template\n\
                   foo,application/x-foo\n\
                   bar (OBSOLETED),application/x-foo\n\
                   baz-deprecated,application/x-baz\n";
        let outcome = parse_registry_csv(raw);

        assert_eq!(outcome.content.len(), 1);
        assert_eq!(outcome.content["application/x-foo"], vec!["foo".to_string()]);
    }

    #[test]
    fn marker_check_ignores_the_type_column() {
        // Only the extension column is inspected for the marker.
        let raw = "Name,Template\nfoo,application/x-obsolete-format\n";
        let outcome = parse_registry_csv(raw);

        assert_eq!(
            outcome.content["application/x-obsolete-format"],
            vec!["foo".to_string()]
        );
    }

    #[test]
    fn short_and_empty_rows_are_ignored() {
        let raw = "Name,Template\nlonerow\n,application/x-foo\nfoo,\n";
        let outcome = parse_registry_csv(raw);

        assert!(outcome.content.is_empty());
        assert_eq!(outcome.skipped_lines, 0);
    }

    #[test]
    fn boundary_attaches_last_modified_as_version() {
        let response = SourceResponse::new(
            "Name,Template\nfoo,application/x-foo\n",
            Some("\"etag-ignored-here\"".to_string()),
            Some("Mon, 30 Jun 2025 12:00:00 GMT".to_string()),
        );
        let record = parse_iana(&response).expect("record");

        assert_eq!(
            record.version.as_deref(),
            Some("Mon, 30 Jun 2025 12:00:00 GMT")
        );
    }
}
