use serde::Deserialize;

use crate::error::LandingError;

/// Id of the optional inline JSON block that overrides the defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Every constant and user-facing string used by the interaction layer.
///
/// Any subset of fields may be overridden from the page, missing fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub header_shadow_threshold: f64,
    pub header_shadow: String,
    pub to_top_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_class: String,
    pub reveal_selector: String,
    pub char_limit: usize,
    pub submit_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub toast_fade_ms: u32,
    pub busy_label: String,
    pub validation_message: String,
    pub success_message: String,
    pub missing_video_notice: String,
    pub select_placeholder: String,
    pub toast_error_background: String,
    pub toast_success_background: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            header_shadow_threshold: 18.0,
            header_shadow: "0 14px 50px rgba(178,122,255,0.06)".to_string(),
            to_top_threshold: 360.0,
            reveal_threshold: 0.15,
            reveal_class: "reveal".to_string(),
            reveal_selector: "[data-reveal], .why-card, .neon-step, .example-card, .neon-panel, .order-form, .section-title".to_string(),
            char_limit: 300,
            submit_delay_ms: 1500,
            toast_duration_ms: 3000,
            toast_fade_ms: 350,
            busy_label: "Создаём...".to_string(),
            validation_message: "Пожалуйста, заполните все поля.".to_string(),
            success_message: "Заявка принята! Мы уже создаём ваше видео 🚀".to_string(),
            missing_video_notice: "Видео не найдено. Положите файл в /images и укажите путь в data-video.".to_string(),
            select_placeholder: "Выберите событие".to_string(),
            toast_error_background: "linear-gradient(90deg,#ff6b6b,#ff9aa2)".to_string(),
            toast_success_background: "linear-gradient(90deg,var(--neon-cyan),var(--neon-blue))".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse an override block. Fields not present keep their default value.
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Use the override block when it parses, otherwise fall back to defaults.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("Ignoring landing config override: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
