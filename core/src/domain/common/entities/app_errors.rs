use thiserror::Error;

/// Failure kinds surfaced by the analysis pipeline.
///
/// Every variant is terminal for the current attempt: the user has to
/// start a new upload to try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The selected file does not declare an image media type.
    #[error("{0}")]
    InvalidInput(String),

    /// The analysis call failed: transport error, non-2xx answer,
    /// malformed or incomplete body, or an interrupted simulation.
    #[error("{0}")]
    ServiceError(String),

    /// The results view was opened without a result in hand.
    #[error("No analysis result available")]
    MissingResult,

    /// An upload was submitted while the flow was not accepting one.
    #[error("Uploads are disabled until the flow is back on the upload view")]
    UploadDisabled,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
