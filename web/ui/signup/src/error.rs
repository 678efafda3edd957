use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::model::Field;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid signup config: {0}")]
    Config(String),

    #[error("Browser API unavailable: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Config(error.to_string())
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// A field that failed its rule on the last submit, with the message shown under it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}
