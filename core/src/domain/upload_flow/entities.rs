use serde::Serialize;

/// Where the upload flow currently stands.
///
/// `Idle -> Analyzing -> Navigated` on success, `Analyzing -> Idle` on
/// failure. Uploads are only accepted while `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UploadState {
    Idle,
    Analyzing { file_name: String },
    Navigated,
}

impl UploadState {
    /// Whether the busy indicator should be shown.
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadState::Analyzing { .. })
    }

    pub fn accepts_uploads(&self) -> bool {
        matches!(self, UploadState::Idle)
    }
}
