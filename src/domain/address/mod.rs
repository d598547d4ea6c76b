pub mod address;
pub mod address_repository_interface;
pub mod rules;
