pub mod constant;
pub mod device;
pub mod model;
pub mod store;
