pub mod rules;
pub mod user;
pub mod user_repository_interface;
