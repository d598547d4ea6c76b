use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};

use crate::application::media::transcoder::ImageTranscoder;
use crate::core::configure::image::ImageConfig;
use crate::core::error::{AppError, AppResult};

pub const JPEG_MIME: &str = "image/jpeg";
pub const PNG_MIME: &str = "image/png";

/// Outcome of one compression run. On a budget miss this still carries the
/// smallest attempt produced, with `met_budget` false; callers decide
/// whether that is acceptable.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImage {
    /// Base64 data URL, ready to embed in a document.
    pub data: String,
    pub achieved_size_kb: u32,
    pub met_budget: bool,
}

/// Wraps encoded image bytes into a base64 data URL.
pub fn encode_data_url(data: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

/// Size of a data URL's payload in KB, from the encoded length:
/// bytes = encoded length * 3/4, KB = bytes / 1024.
pub fn data_url_size_kb(data_url: &str) -> u32 {
    let encoded = data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or(data_url);
    let bytes = encoded.len() * 3 / 4;
    (bytes as f64 / 1024.0).round() as u32
}

/// Guesses the mime type from the resource handle's extension; the codec
/// re-encodes everything as JPEG anyway, so this only matters for display.
pub fn mime_type_of(uri: &str) -> &'static str {
    let lower = uri.to_ascii_lowercase();
    if lower.ends_with(".png") {
        PNG_MIME
    } else {
        JPEG_MIME
    }
}

pub fn validate_image_size(size_kb: u32, max_kb: u32) -> bool {
    size_kb <= max_kb
}

/// Iteratively recompresses the image behind `source_uri` until its encoded
/// form fits `max_kb`, or the attempt cap is reached.
///
/// Starts at the configured base quality and width; each failed attempt
/// drops quality by the quality step (clamped to the floor) and width by
/// the width step (clamped to the floor). Both dimensions shrink every
/// iteration, so with the fixed attempt cap the loop always terminates.
/// On a budget miss the smallest attempt is returned with `met_budget`
/// false and a warning is logged; the caller decides what to do with an
/// over-budget image.
pub async fn compress_to_budget(
    transcoder: &dyn ImageTranscoder,
    source_uri: &str,
    max_kb: u32,
    config: &ImageConfig,
) -> AppResult<CompressedImage> {
    let mut quality = config.base_quality;
    let mut width = config.base_width;
    let mut best: Option<CompressedImage> = None;

    for attempt in 1..=config.max_attempts {
        let encoded = transcoder.transcode(source_uri, width, quality).await?;
        let data = encode_data_url(&encoded, JPEG_MIME);
        let achieved_size_kb = data_url_size_kb(&data);
        debug!(
            "compression attempt {}/{}: width {}px quality {:.2} -> {} KB (budget {} KB)",
            attempt, config.max_attempts, width, quality, achieved_size_kb, max_kb
        );

        let candidate = CompressedImage {
            data,
            achieved_size_kb,
            met_budget: validate_image_size(achieved_size_kb, max_kb),
        };
        if candidate.met_budget {
            return Ok(candidate);
        }

        if best
            .as_ref()
            .map_or(true, |b| candidate.achieved_size_kb <= b.achieved_size_kb)
        {
            best = Some(candidate);
        }

        quality = (quality - config.quality_step).max(config.min_quality);
        width = width.saturating_sub(config.width_step).max(config.min_width);
    }

    match best {
        Some(result) => {
            warn!(
                "image {} still {} KB after {} attempts, budget {} KB; returning best effort",
                source_uri, result.achieved_size_kb, config.max_attempts, max_kb
            );
            Ok(result)
        }
        None => Err(AppError::ImageError(
            "compression ran zero attempts; check the attempt cap".to_string(),
        )),
    }
}

/// Compresses up to `max_count` images, each against its own `per_image_kb`
/// budget; inputs beyond the cap are discarded. Attempts never overlap, one
/// image runs at a time.
pub async fn compress_multiple(
    transcoder: &dyn ImageTranscoder,
    source_uris: &[String],
    max_count: usize,
    per_image_kb: u32,
    config: &ImageConfig,
) -> AppResult<Vec<CompressedImage>> {
    if source_uris.len() > max_count {
        debug!("discarding {} extra images beyond the cap of {}", source_uris.len() - max_count, max_count);
    }

    let mut results = Vec::with_capacity(source_uris.len().min(max_count));
    for source_uri in source_uris.iter().take(max_count) {
        results.push(compress_to_budget(transcoder, source_uri, per_image_kb, config).await?);
    }
    Ok(results)
}
