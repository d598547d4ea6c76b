pub mod comment;
pub mod comment_repository_interface;
pub mod rules;
