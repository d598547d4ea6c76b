use async_trait::async_trait;
use bytes::Bytes;

use crate::core::error::AppResult;

/// The platform image codec, an external collaborator. The mobile shell
/// backs this with the native image library; tests use a synthetic one.
#[async_trait]
pub trait ImageTranscoder: Send + Sync {
    /// Resizes the image behind `source_uri` to at most `max_width` pixels
    /// (aspect ratio preserved) and encodes it as JPEG at `quality` in
    /// `0.0..=1.0`.
    async fn transcode(&self, source_uri: &str, max_width: u32, quality: f32) -> AppResult<Bytes>;
}
