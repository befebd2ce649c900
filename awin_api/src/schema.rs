//! Fixed column schema shared by the request builder and the response decoder.
//!
//! The download endpoint returns exactly the columns named in the URL, in the
//! requested order. [`FEED_COLUMNS`] is that order, and it must stay in
//! lock-step with the field order of [`crate::types::FeedEntry`] or positional
//! decoding silently assigns values to the wrong fields.

use std::sync::OnceLock;

/// Number of columns requested for every feed download.
pub const FEED_COLUMN_COUNT: usize = 86;

/// Columns requested from the feed download endpoint, in canonical order.
pub const FEED_COLUMNS: [&str; FEED_COLUMN_COUNT] = [
    "aw_deep_link",
    "product_name",
    "aw_product_id",
    "merchant_product_id",
    "merchant_image_url",
    "description",
    "merchant_category",
    "search_price",
    "merchant_name",
    "merchant_id",
    "category_name",
    "category_id",
    "aw_image_url",
    "currency",
    "store_price",
    "delivery_cost",
    "merchant_deep_link",
    "language",
    "last_updated",
    "display_price",
    "data_feed_id",
    "brand_name",
    "brand_id",
    "colour",
    "product_short_description",
    "specifications",
    "condition",
    "product_model",
    "model_number",
    "dimensions",
    "keywords",
    "promotional_text",
    "product_type",
    "commission_group",
    "merchant_product_category_path",
    "merchant_product_second_category",
    "merchant_product_third_category",
    "rrp_price",
    "saving",
    "savings_percent",
    "base_price",
    "base_price_amount",
    "base_price_text",
    "product_price_old",
    "delivery_restrictions",
    "delivery_weight",
    "warranty",
    "terms_of_contract",
    "delivery_time",
    "in_stock",
    "stock_quantity",
    "valid_from",
    "valid_to",
    "is_for_sale",
    "web_offer",
    "pre_order",
    "stock_status",
    "size_stock_status",
    "size_stock_amount",
    "merchant_thumb_url",
    "large_image",
    "alternate_image",
    "aw_thumb_url",
    "alternate_image_two",
    "alternate_image_three",
    "alternate_image_four",
    "reviews",
    "average_rating",
    "rating",
    "number_available",
    "custom_1",
    "custom_2",
    "custom_3",
    "custom_4",
    "custom_5",
    "custom_6",
    "custom_7",
    "custom_8",
    "custom_9",
    "ean",
    "isbn",
    "upc",
    "mpn",
    "parent_product_id",
    "product_GTIN",
    "basket_link",
];

/// Header row of the feed list endpoint.
pub const FEED_LIST_COLUMNS: [&str; 12] = [
    "Advertiser ID",
    "Advertiser Name",
    "Primary Region",
    "Membership Status",
    "Feed ID",
    "Feed Name",
    "Language",
    "Vertical",
    "Last Imported",
    "Last Checked",
    "No of products",
    "URL",
];

static FEED_COLUMNS_PARAM: OnceLock<String> = OnceLock::new();

/// The `columns` path segment: [`FEED_COLUMNS`] joined with commas.
///
/// Built once on first use and shared for the lifetime of the process.
pub fn feed_columns_param() -> &'static str {
    FEED_COLUMNS_PARAM.get_or_init(|| FEED_COLUMNS.join(","))
}
