pub mod profile_service;
pub mod profile_service_interface;
