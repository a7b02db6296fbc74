//! HTTP request representation and transport.
//!
//! Options mutate an [`ApiRequest`], which is plain data until [`send`] turns
//! it into a `reqwest` call. Query parameters come in two flavors:
//!
//! - **set** parameters live in a key-sorted map and are form-urlencoded, so a
//!   later write to the same key replaces the earlier one;
//! - **raw fragments** (`field!=value`, `field<180`) bypass the key/value
//!   encoder and are appended after the encoded pairs, in the order they were
//!   added, and never replace anything. `url::Url` still escapes characters
//!   that cannot appear in a query, so `field<180` goes out as `field%3C180`.

use std::collections::BTreeMap;
use std::time::Duration;

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Characters escaped in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// A GET request under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    endpoint: String,
    params: BTreeMap<String, String>,
    fragments: Vec<String>,
    headers: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Start a request for `path` resolved against `base_url`.
    pub fn new(base_url: &str, path: &str) -> Self {
        Self {
            path: path.to_string(),
            endpoint: build_endpoint(base_url, path),
            params: BTreeMap::new(),
            fragments: Vec::new(),
            headers: BTreeMap::new(),
        }
    }

    /// The relative path this request was created for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The absolute endpoint, without query string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Set a query parameter, replacing any previous value for `key`.
    pub fn set_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Append a raw query fragment such as `name!=Frodo`.
    pub fn append_fragment(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Set a header, replacing any previous value. Names are case-insensitive.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    /// The current value of set parameter `key`. Raw fragments are not
    /// searched.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The value of header `name`, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// All headers, with lowercased names, sorted by name.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encoded set parameters followed by the raw fragments.
    pub fn query_string(&self) -> String {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish();

        std::iter::once(encoded)
            .chain(self.fragments.iter().cloned())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Resolve the final URL.
    pub fn url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|source| Error::InvalidUrl {
            endpoint: self.path.clone(),
            source,
        })?;
        let query = self.query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }
}

/// Join `base_url` and a relative `path` with exactly one slash.
///
/// Leading and trailing slashes on `path` are ignored, so `"/book/"`, `"book"`
/// and `"/book"` all resolve to `{base}/book`. An empty path yields the base.
pub fn build_endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Path of one record under `collection`, optionally followed by `tail`.
///
/// `id` is percent-encoded as a single segment, so `a?b` becomes `a%3Fb`
/// instead of starting a query string. Ids that would not name a record
/// (empty, `.` or `..`) fail with [`Error::NotFound`] before anything is
/// sent.
///
/// # Example
/// ```rust
/// use one_api_sdk::http::record_path;
///
/// assert_eq!(record_path("/book", "b1", Some("chapter")).unwrap(), "/book/b1/chapter");
/// assert_eq!(record_path("/book", "a?b", None).unwrap(), "/book/a%3Fb");
/// assert!(record_path("/book", "", None).is_err());
/// ```
pub fn record_path(collection: &str, id: &str, tail: Option<&str>) -> Result<String> {
    let mut path = format!("{}/{}", collection, utf8_percent_encode(id, PATH_SEGMENT));
    if let Some(tail) = tail {
        path.push('/');
        path.push_str(tail);
    }

    if matches!(id, "" | "." | "..") {
        return Err(Error::NotFound { endpoint: path });
    }
    Ok(path)
}

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Build the default HTTP client.
pub fn build_http_client(
    timeout: Option<Duration>,
    proxy: Option<&str>,
) -> std::result::Result<Client, reqwest::Error> {
    let mut builder = Client::builder();

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }

    builder.build()
}

/// Issue `request` and buffer the whole body.
pub async fn send(http: &Client, request: &ApiRequest) -> Result<RawResponse> {
    let url = request.url()?;
    debug!(endpoint = request.path(), url = %url, "dispatching request");

    let transport = |source| Error::Transport {
        endpoint: request.path().to_string(),
        source,
    };

    let mut builder = http.get(url);
    for (name, value) in request.headers() {
        builder = builder.header(name, value);
    }

    let response = builder.send().await.map_err(transport)?;
    let status = response.status();
    let body = response.bytes().await.map_err(transport)?;
    debug!(
        endpoint = request.path(),
        status = status.as_u16(),
        bytes = body.len(),
        "response received"
    );

    Ok(RawResponse { status, body })
}
