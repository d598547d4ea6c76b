pub mod app_state;
pub mod configure;
pub mod error;
