pub mod address;
pub mod comment;
pub mod feed;
pub mod media;
pub mod profile;
