use serde::{Deserialize, Serialize};

/// One advertiser/feed relationship from the feed list endpoint.
///
/// Values are opaque text; Awin does not guarantee number or date formats
/// for `no_of_products`, `last_imported` or `last_checked`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedListRow {
    #[serde(rename(deserialize = "Advertiser ID"))]
    pub advertiser_id: String,
    #[serde(rename(deserialize = "Advertiser Name"))]
    pub advertiser_name: String,
    #[serde(rename(deserialize = "Primary Region"))]
    pub primary_region: String,
    /// Whether the publisher has joined the advertiser programme.
    #[serde(rename(deserialize = "Membership Status"))]
    pub membership_status: String,
    #[serde(rename(deserialize = "Feed ID"))]
    pub feed_id: String,
    #[serde(rename(deserialize = "Feed Name"))]
    pub feed_name: String,
    #[serde(rename(deserialize = "Language"))]
    pub language: String,
    #[serde(rename(deserialize = "Vertical"))]
    pub vertical: String,
    #[serde(rename(deserialize = "Last Imported"))]
    pub last_imported: String,
    #[serde(rename(deserialize = "Last Checked"))]
    pub last_checked: String,
    #[serde(rename(deserialize = "No of products"))]
    pub no_of_products: String,
    /// Ready-made download link for this single feed.
    #[serde(rename(deserialize = "URL"))]
    pub url: String,
}
