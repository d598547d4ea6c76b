pub mod photo_count_must_not_exceed_limit;
pub mod text_must_not_be_empty;

pub use photo_count_must_not_exceed_limit::PhotoCountMustNotExceedLimit;
pub use text_must_not_be_empty::TextMustNotBeEmpty;
