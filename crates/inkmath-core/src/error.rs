pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported math node kind: {kind}")]
    UnsupportedNodeKind { kind: String },

    #[error("invalid recognition model: {message}")]
    InvalidModel { message: String },

    #[error("recognition result JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModel {
            message: message.into(),
        }
    }
}
