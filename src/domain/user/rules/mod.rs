pub mod email_must_be_valid;

pub use email_must_be_valid::EmailMustBeValid;
