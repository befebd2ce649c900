//! Client for the Awin product data API.

use url::Url;

use crate::{
    decode::{decode_csv, inflate_feed, ColumnMapping},
    query::{download_url, feed_list_url, FeedQuery, UrlEncoding, DEFAULT_DELIMITER},
    schema::feed_columns_param,
    transport::{default_http_client, Request, Transport},
    types::{FeedEntry, FeedListRow},
    Error,
};

/// Production endpoint of the Awin product data service.
pub const DEFAULT_BASE_URL: &str = "https://productdata.awin.com";

/// Client for the Awin feed list and feed download endpoints.
///
/// The API key is fixed at construction. Every fetch is one request, one
/// response and one decode; nothing is cached between calls.
pub struct Client<T = reqwest::Client> {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    api_key: String,
    url_encoding: UrlEncoding,
    column_mapping: ColumnMapping,
    transport: T,
}

impl Client {
    /// Creates a client for the production API using a reqwest client built
    /// by this crate.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Ok(Client::with_transport(api_key, default_http_client()?).with_api_base(base_url))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(api_key: &str, transport: T) -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            url_encoding: UrlEncoding::default(),
            column_mapping: ColumnMapping::default(),
            transport,
        }
    }

    pub fn with_api_base(mut self, base_url: &str) -> Self {
        self.base_api_url = base_url.to_string();
        self
    }

    pub fn with_url_encoding(mut self, url_encoding: UrlEncoding) -> Self {
        self.url_encoding = url_encoding;
        self
    }

    pub fn with_column_mapping(mut self, column_mapping: ColumnMapping) -> Self {
        self.column_mapping = column_mapping;
        self
    }

    /// URL of the feed list for this client's API key.
    pub fn feed_list_url(&self) -> Result<Url, Error> {
        feed_list_url(&self.base_api_url, &self.api_key, self.url_encoding)
    }

    /// URL of the download for `query`, requesting every schema column.
    pub fn feed_url(&self, query: &FeedQuery) -> Result<Url, Error> {
        download_url(
            &self.base_api_url,
            &self.api_key,
            query,
            feed_columns_param(),
            DEFAULT_DELIMITER,
            self.url_encoding,
        )
    }

    async fn get(&self, request: Request) -> Result<Vec<u8>, Error> {
        let resp = self.transport.execute(request).await?;
        if !resp.is_success() {
            let body = truncate_body(&String::from_utf8_lossy(&resp.body));
            return Err(Error::HttpStatus {
                status: resp.status,
                body,
            });
        }
        Ok(resp.body)
    }

    /// Fetches every feed, joined or not, available to the publisher.
    pub async fn fetch_feed_list(&self) -> Result<Vec<FeedListRow>, Error> {
        let url = self.feed_list_url()?;
        tracing::debug!("Fetching feed list from {}", redacted(&url));
        let body = self.get(Request::get(url)).await?;
        decode_csv(&body, self.column_mapping)
    }

    /// Downloads and decodes the products of the feeds selected by `query`.
    pub async fn fetch_feed(&self, query: &FeedQuery) -> Result<Vec<FeedEntry>, Error> {
        let url = self.feed_url(query)?;
        tracing::debug!(
            "Fetching {} feed(s) in '{}' from {}",
            query.feed_ids.len(),
            query.language,
            redacted(&url)
        );
        let body = self
            .get(Request::get(url).with_header("Accept-Encoding", "gzip"))
            .await?;
        let plain = inflate_feed(&body)?;
        decode_csv(&plain, self.column_mapping)
    }
}

/// Origin of `url`, keeping the API key out of logs.
fn redacted(url: &Url) -> String {
    url.origin().ascii_serialization()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
