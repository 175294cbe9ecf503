use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum LandingError {
    #[error("Element not found: {0}")]
    MissingElement(String),
    #[error("Video source not found")]
    VideoNotFound,
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        LandingError::Js(message)
    }
}
