mod feed;
pub use self::feed::FeedQuery;

mod endpoint;
pub(crate) use self::endpoint::download_url;
pub use self::endpoint::{feed_list_url, feed_url, UrlEncoding, DEFAULT_DELIMITER};
