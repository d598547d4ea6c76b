pub mod location_must_be_valid;
pub mod name_must_not_be_empty;

pub use location_must_be_valid::LocationMustBeValid;
pub use name_must_not_be_empty::NameMustNotBeEmpty;
