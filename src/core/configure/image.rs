use serde::Deserialize;

/// Tunables for the image compression pipeline. The defaults are the values
/// the mobile app has always shipped with.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// Encode quality of the first compression attempt.
    #[serde(default = "default_base_quality")]
    pub base_quality: f32,
    /// Target width (px) of the first compression attempt.
    #[serde(default = "default_base_width")]
    pub base_width: u32,
    /// Quality reduction applied between attempts.
    #[serde(default = "default_quality_step")]
    pub quality_step: f32,
    /// Width reduction (px) applied between attempts.
    #[serde(default = "default_width_step")]
    pub width_step: u32,
    /// Quality never drops below this floor.
    #[serde(default = "default_min_quality")]
    pub min_quality: f32,
    /// Width never drops below this floor (px).
    #[serde(default = "default_min_width")]
    pub min_width: u32,
    /// Attempt cap for one compression run.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Size budget (KB) used when the caller does not pass one.
    #[serde(default = "default_budget_kb")]
    pub default_budget_kb: u32,
    /// Width/quality for plain single-image conversion outside the budget loop.
    #[serde(default = "default_single_width")]
    pub single_width: u32,
    #[serde(default = "default_single_quality")]
    pub single_quality: f32,
    /// Width/quality for plain multi-image conversion outside the budget loop.
    #[serde(default = "default_multi_width")]
    pub multi_width: u32,
    #[serde(default = "default_multi_quality")]
    pub multi_quality: f32,
    /// Photos accepted on one comment.
    #[serde(default = "default_comment_photo_limit")]
    pub comment_photo_limit: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_quality: default_base_quality(),
            base_width: default_base_width(),
            quality_step: default_quality_step(),
            width_step: default_width_step(),
            min_quality: default_min_quality(),
            min_width: default_min_width(),
            max_attempts: default_max_attempts(),
            default_budget_kb: default_budget_kb(),
            single_width: default_single_width(),
            single_quality: default_single_quality(),
            multi_width: default_multi_width(),
            multi_quality: default_multi_quality(),
            comment_photo_limit: default_comment_photo_limit(),
        }
    }
}

fn default_base_quality() -> f32 {
    0.8
}

fn default_base_width() -> u32 {
    800
}

fn default_quality_step() -> f32 {
    0.15
}

fn default_width_step() -> u32 {
    150
}

fn default_min_quality() -> f32 {
    0.1
}

fn default_min_width() -> u32 {
    200
}

fn default_max_attempts() -> u32 {
    5
}

fn default_budget_kb() -> u32 {
    500
}

fn default_single_width() -> u32 {
    800
}

fn default_single_quality() -> f32 {
    0.7
}

fn default_multi_width() -> u32 {
    600
}

fn default_multi_quality() -> f32 {
    0.6
}

fn default_comment_photo_limit() -> usize {
    3
}
