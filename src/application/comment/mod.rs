pub mod comment_service;
pub mod comment_service_interface;
