mod feed_list;
pub use self::feed_list::FeedListRow;

mod feed_entry;
pub use self::feed_entry::FeedEntry;
