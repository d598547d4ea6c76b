pub mod address_feed;
pub mod comment_feed;
pub mod merge;

pub use address_feed::AddressFeed;
pub use comment_feed::CommentFeed;
pub use merge::merge_visible;
