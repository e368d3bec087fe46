use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid theme configuration: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("server responded with status {0}")]
    Status(u16),
}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ThemeError::Js(message)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        ThemeError::Config(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ThemeError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ThemeError::Config(e.to_string())
    }
}

impl From<ThemeError> for JsValue {
    fn from(e: ThemeError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
