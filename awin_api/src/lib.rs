mod client;
pub mod decode;
mod errors;
mod query;
pub mod schema;
mod transport;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::decode::ColumnMapping;
pub use self::errors::Error;
pub use self::query::{feed_list_url, feed_url, FeedQuery, UrlEncoding, DEFAULT_DELIMITER};
pub use self::transport::{RawResponse, Request, Transport};
