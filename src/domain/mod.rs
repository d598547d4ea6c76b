pub mod address;
pub mod business_rule_interface;
pub mod comment;
pub mod session;
pub mod user;
