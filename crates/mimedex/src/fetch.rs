use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ETAG, HeaderName, IF_NONE_MATCH, LAST_MODIFIED};

use crate::error::Result;
use crate::models::SourceResponse;

/// Upstream type-map sources the registry is usually built from.
pub const APACHE_SOURCE_URL: &str =
    "https://svn.apache.org/repos/asf/httpd/httpd/trunk/docs/conf/mime.types";
pub const DEBIAN_SOURCE_URL: &str =
    "https://salsa.debian.org/debian/media-types/-/raw/master/mime.types";
pub const NGINX_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/nginx/nginx/master/conf/mime.types";
pub const IANA_SOURCE_URL: &str =
    "https://www.iana.org/assignments/media-types/application.csv";

/// Blocking fetch collaborator for upstream sources. It decides nothing
/// about merge cadence or retries; callers hand its responses to a parser
/// and the parser's record to the registry.
#[derive(Clone)]
pub struct SourceClient {
    http: Client,
}

impl std::fmt::Debug for SourceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceClient").finish_non_exhaustive()
    }
}

impl SourceClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn get(&self, url: &str) -> Result<SourceResponse> {
        let response = self.http.get(url).send()?.error_for_status()?;
        into_source_response(response)
    }

    /// Conditional fetch keyed on a previously returned freshness token.
    /// `Ok(None)` means the upstream reports the cached snapshot is still
    /// current.
    pub fn get_if_changed(
        &self,
        url: &str,
        version: Option<&str>,
    ) -> Result<Option<SourceResponse>> {
        let mut request = self.http.get(url);
        if let Some(version) = version {
            request = request.header(IF_NONE_MATCH, version);
        }

        let response = request.send()?;
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        into_source_response(response).map(Some)
    }
}

fn into_source_response(response: Response) -> Result<SourceResponse> {
    let etag = header_value(&response, ETAG);
    let last_modified = header_value(&response, LAST_MODIFIED);
    let body = response.text()?;
    Ok(SourceResponse::new(body, etag, last_modified))
}

fn header_value(response: &Response, name: HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
