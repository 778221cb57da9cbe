//! Error types for the lunge analysis core.
//!
//! Degenerate geometry (missing joints, non-finite coordinates) is not an
//! error. Only contract violations at the boundary end up here.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid frame shape: expected {expected} values, got {actual}")]
    InvalidFrameShape { expected: usize, actual: usize },

    #[error("invalid threshold configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
