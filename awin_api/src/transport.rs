//! The HTTP seam between the client and whatever performs the request.

use std::future::Future;
use std::time::Duration;

use url::Url;

use crate::Error;

/// Request timeout for the client built by [`crate::Client::new`]. Feed
/// downloads can run to many megabytes.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// A GET request ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub url: Url,
    pub headers: Vec<(&'static str, &'static str)>,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

/// Status and complete body of a response, exactly as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single request and hands back the raw response.
///
/// Implementations should hand the body over untouched. A transport that
/// inflates `Content-Encoding: gzip` itself, such as a reqwest client built
/// with reqwest's `gzip` feature, still works: feed bodies without the gzip
/// magic bytes are parsed as plain CSV (see [`crate::decode::inflate_feed`]).
/// Timeouts, proxies and TLS are the implementation's concern. Failures to get any response at all should be
/// reported as [`Error::Transport`].
pub trait Transport {
    fn execute(&self, request: Request) -> impl Future<Output = Result<RawResponse, Error>> + Send;
}

impl Transport for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<RawResponse, Error> {
        let mut builder = self.get(request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        let resp = builder.send().await.map_err(Error::transport)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(Error::transport)?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Builds the reqwest client used when the caller does not supply one.
///
/// Transparent gzip decoding is turned off, in case another crate in the
/// build enables reqwest's `gzip` feature, so `Content-Encoding: gzip`
/// responses are left for [`crate::decode::gunzip`].
pub(crate) fn default_http_client() -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(concat!("awin_api/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .no_gzip()
        .build()
        .map_err(Error::transport)
}
