use serde::{Deserialize, Serialize};

/// One product row of a downloaded data feed.
///
/// Field order matches [`crate::schema::FEED_COLUMNS`]. Every value is kept as
/// the raw text Awin sent; prices, dates and flags are not parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Tracked Awin deep link to the product page.
    pub aw_deep_link: String,
    pub product_name: String,
    pub aw_product_id: String,
    pub merchant_product_id: String,
    pub merchant_image_url: String,
    pub description: String,
    pub merchant_category: String,
    pub search_price: String,
    pub merchant_name: String,
    pub merchant_id: String,
    pub category_name: String,
    pub category_id: String,
    pub aw_image_url: String,
    pub currency: String,
    pub store_price: String,
    pub delivery_cost: String,
    pub merchant_deep_link: String,
    pub language: String,
    pub last_updated: String,
    pub display_price: String,
    /// Feed this product was exported from.
    pub data_feed_id: String,
    pub brand_name: String,
    pub brand_id: String,
    pub colour: String,
    pub product_short_description: String,
    pub specifications: String,
    pub condition: String,
    pub product_model: String,
    pub model_number: String,
    pub dimensions: String,
    pub keywords: String,
    pub promotional_text: String,
    pub product_type: String,
    pub commission_group: String,
    pub merchant_product_category_path: String,
    pub merchant_product_second_category: String,
    pub merchant_product_third_category: String,
    pub rrp_price: String,
    pub saving: String,
    pub savings_percent: String,
    pub base_price: String,
    pub base_price_amount: String,
    pub base_price_text: String,
    pub product_price_old: String,
    pub delivery_restrictions: String,
    pub delivery_weight: String,
    pub warranty: String,
    pub terms_of_contract: String,
    pub delivery_time: String,
    pub in_stock: String,
    pub stock_quantity: String,
    pub valid_from: String,
    pub valid_to: String,
    pub is_for_sale: String,
    pub web_offer: String,
    pub pre_order: String,
    pub stock_status: String,
    pub size_stock_status: String,
    pub size_stock_amount: String,
    pub merchant_thumb_url: String,
    pub large_image: String,
    pub alternate_image: String,
    pub aw_thumb_url: String,
    pub alternate_image_two: String,
    pub alternate_image_three: String,
    pub alternate_image_four: String,
    pub reviews: String,
    pub average_rating: String,
    pub rating: String,
    pub number_available: String,
    // Merchant-defined extension fields.
    pub custom_1: String,
    pub custom_2: String,
    pub custom_3: String,
    pub custom_4: String,
    pub custom_5: String,
    pub custom_6: String,
    pub custom_7: String,
    pub custom_8: String,
    pub custom_9: String,
    pub ean: String,
    pub isbn: String,
    pub upc: String,
    pub mpn: String,
    pub parent_product_id: String,
    #[serde(rename = "product_GTIN")]
    pub product_gtin: String,
    pub basket_link: String,
}
