pub mod image_service;
pub mod transcoder;

pub use image_service::{
    compress_multiple, compress_to_budget, data_url_size_kb, encode_data_url, mime_type_of,
    validate_image_size, CompressedImage,
};
pub use transcoder::ImageTranscoder;
