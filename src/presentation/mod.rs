pub mod address;
pub mod comment;
pub mod user;
