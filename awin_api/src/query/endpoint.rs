//! Request URL construction for the feed list and feed download endpoints.
//!
//! Example download URL:
//! `https://productdata.awin.com/datafeed/download/apikey/<key>/language/de/fid/123,456/columns/aw_deep_link,product_name/format/csv/delimiter/,/compression/gzip/adultcontent/1/`

use url::Url;

use super::FeedQuery;
use crate::Error;

/// Column delimiter requested from the download endpoint.
pub const DEFAULT_DELIMITER: &str = ",";

/// How values are written into URL path segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UrlEncoding {
    /// Insert values byte-for-byte, matching the wire format Awin documents.
    #[default]
    Verbatim,
    /// Percent-encode each path segment. Commas are left as they are.
    PercentEncode,
}

fn build_url(base: &str, segments: &[&str], encoding: UrlEncoding) -> Result<Url, Error> {
    match encoding {
        UrlEncoding::Verbatim => {
            let raw = format!("{}/{}", base.trim_end_matches('/'), segments.join("/"));
            Ok(Url::parse(&raw)?)
        }
        UrlEncoding::PercentEncode => {
            let mut url = Url::parse(base)?;
            url.path_segments_mut()
                .map_err(|_| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
                .pop_if_empty()
                .extend(segments);
            Ok(url)
        }
    }
}

/// Builds `{base}/datafeed/list/apikey/{api_key}`.
pub fn feed_list_url(base: &str, api_key: &str, encoding: UrlEncoding) -> Result<Url, Error> {
    build_url(base, &["datafeed", "list", "apikey", api_key], encoding)
}

/// Builds the download URL for `query`, requesting `columns` in the given order.
///
/// Fails with [`Error::InvalidQuery`] when the query has no feed ids or an
/// invalid language code.
pub fn feed_url(
    base: &str,
    api_key: &str,
    query: &FeedQuery,
    columns: &[&str],
    delimiter: &str,
    encoding: UrlEncoding,
) -> Result<Url, Error> {
    download_url(base, api_key, query, &columns.join(","), delimiter, encoding)
}

/// Same as [`feed_url`] with the `columns` segment already joined.
pub(crate) fn download_url(
    base: &str,
    api_key: &str,
    query: &FeedQuery,
    columns: &str,
    delimiter: &str,
    encoding: UrlEncoding,
) -> Result<Url, Error> {
    query.validate()?;
    let feed_ids = query.feed_ids.join(",");
    // The trailing empty segment keeps the final slash the endpoint expects.
    build_url(
        base,
        &[
            "datafeed",
            "download",
            "apikey",
            api_key,
            "language",
            &query.language,
            "fid",
            &feed_ids,
            "columns",
            columns,
            "format",
            "csv",
            "delimiter",
            delimiter,
            "compression",
            "gzip",
            "adultcontent",
            query.adult_content_flag(),
            "",
        ],
        encoding,
    )
}
