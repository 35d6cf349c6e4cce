use quire_markup::MarkupError;
use quire_sdt::{ControlError, ControlErrorKind};
use thiserror::Error;

/// Every failure the document layer can surface.
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Control construction failed: {0}")]
    Control(#[from] ControlError),

    #[error("Markup writing failed: {0}")]
    Markup(#[from] MarkupError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document description: {0}")]
    Description(String),
}

impl QuireError {
    /// The control error kind, if this failure came from a control constructor.
    pub fn control_kind(&self) -> Option<ControlErrorKind> {
        match self {
            QuireError::Control(e) => Some(e.kind()),
            _ => None,
        }
    }
}
