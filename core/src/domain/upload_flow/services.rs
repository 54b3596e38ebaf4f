use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::AnalysisResult, policies::ensure_image_media_type, ports::AnalysisService,
        value_objects::ImageUpload,
    },
    notification::{entities::Notification, ports::Notifier},
    upload_flow::entities::UploadState,
};

const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Drives one upload from file selection to the results handoff.
///
/// `submit` takes `&mut self`, so a second upload cannot start while one is
/// awaiting the analysis service. Observers that render a busy indicator
/// follow the state through [`UploadFlow::subscribe`].
pub struct UploadFlow<A, N> {
    analysis_service: A,
    notifier: N,
    state: watch::Sender<UploadState>,
}

impl<A, N> UploadFlow<A, N>
where
    A: AnalysisService,
    N: Notifier,
{
    pub fn new(analysis_service: A, notifier: N) -> Self {
        let (state, _) = watch::channel(UploadState::Idle);
        Self {
            analysis_service,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadState> {
        self.state.subscribe()
    }

    pub fn analysis_service(&self) -> &A {
        &self.analysis_service
    }

    /// Validates the image, runs the analysis and hands the result over.
    ///
    /// On success the flow ends up `Navigated` and the caller owns the only
    /// copy of the result. On failure it is back to `Idle` and nothing is
    /// retried.
    #[instrument(
        skip(self, image),
        fields(file_name = %image.file_name, media_type = %image.media_type)
    )]
    pub async fn submit(&mut self, image: ImageUpload) -> Result<AnalysisResult, CoreError> {
        if !self.state.borrow().accepts_uploads() {
            warn!("upload rejected, flow is not idle");
            return Err(CoreError::UploadDisabled);
        }

        if let Err(e) = ensure_image_media_type(&image.media_type) {
            warn!("rejected non-image upload");
            self.notifier
                .notify(Notification::invalid_file_type(e.to_string()));
            return Err(e);
        }

        self.state.send_replace(UploadState::Analyzing {
            file_name: image.file_name.clone(),
        });

        match self.analysis_service.analyze(image).await {
            Ok(result) => {
                info!(food = %result.food.name, "analysis completed");
                self.state.send_replace(UploadState::Navigated);
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                self.notifier
                    .notify(Notification::analysis_failed(GENERIC_FAILURE_MESSAGE));
                self.state.send_replace(UploadState::Idle);
                Err(e)
            }
        }
    }

    /// Leaves the results view and re-enables uploads.
    pub fn back_to_upload(&mut self) {
        self.state.send_replace(UploadState::Idle);
    }
}
