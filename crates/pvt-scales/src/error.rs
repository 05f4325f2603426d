//! Scale catalog and definition errors.

use pvt_eos::EosError;
use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Error, Debug)]
pub enum ScaleError {
    #[error("Unknown scale: {name}")]
    UnknownScale { name: String },

    /// Definition that deserialized but does not describe a usable model.
    #[error("Invalid scale definition: {message}")]
    Parse { message: String },

    #[error(transparent)]
    Eos(#[from] EosError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScaleError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
