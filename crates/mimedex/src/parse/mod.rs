mod apache;
mod iana;
mod nginx;

pub use apache::{parse_apache, parse_debian};
pub use iana::parse_iana;
pub use nginx::parse_nginx;

use crate::models::{SourceRecord, TypeMap};

/// Result of scanning one upstream source body statement by statement.
/// Malformed statements are skipped and counted, never fatal on their own.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParseOutcome {
    pub(crate) content: TypeMap,
    pub(crate) skipped_lines: usize,
    pub(crate) first_error: Option<(usize, String)>,
}

impl ParseOutcome {
    pub(crate) fn skip(&mut self, line_no: usize, message: impl Into<String>) {
        self.skipped_lines += 1;
        if self.first_error.is_none() {
            self.first_error = Some((line_no, message.into()));
        }
    }
}

/// Parser boundary: diagnostics are logged here and never propagate as
/// errors. A source whose every statement was malformed yields `None`,
/// meaning "no data from this source"; the caller keeps its last-known
/// registry state and decides whether that is fatal.
pub(crate) fn finish_source(
    label: &str,
    version: Option<&str>,
    outcome: ParseOutcome,
) -> Option<SourceRecord> {
    if outcome.content.is_empty() && outcome.skipped_lines > 0 {
        let detail = outcome
            .first_error
            .as_ref()
            .map(|(line_no, message)| format!(" (first at statement {line_no}: {message})"))
            .unwrap_or_default();
        tracing::error!(
            "{label} source yielded no usable entries: skipped {} malformed statements{detail}",
            outcome.skipped_lines
        );
        return None;
    }

    if outcome.skipped_lines > 0 {
        tracing::warn!(
            "{label} source: skipped {} malformed statements",
            outcome.skipped_lines
        );
    }

    Some(SourceRecord {
        version: version.map(str::to_string),
        content: outcome.content,
    })
}
