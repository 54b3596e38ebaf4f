use std::time::Duration;

use tokio::sync::Notify;
use tracing::{debug, instrument, warn};

use crate::domain::{
    common::{DEFAULT_STUB_DELAY, entities::app_errors::CoreError},
    food_analysis::{entities::AnalysisResult, ports::AnalysisService, value_objects::ImageUpload},
    notification::{entities::Notification, ports::Notifier},
};
use crate::infrastructure::analysis::datasets::CannedDataset;

const INTERRUPTED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Networkless analysis that answers with canned data picked from the file
/// name, after a simulated processing delay.
#[derive(Debug)]
pub struct StubAnalysisService<N> {
    delay: Duration,
    notifier: N,
    interrupt: Notify,
}

impl<N> StubAnalysisService<N>
where
    N: Notifier,
{
    pub fn new(delay: Duration, notifier: N) -> Self {
        Self {
            delay,
            notifier,
            interrupt: Notify::new(),
        }
    }

    pub fn with_default_delay(notifier: N) -> Self {
        Self::new(DEFAULT_STUB_DELAY, notifier)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cuts short every simulated analysis currently waiting out its delay.
    pub fn interrupt(&self) {
        self.interrupt.notify_waiters();
    }
}

impl<N> AnalysisService for StubAnalysisService<N>
where
    N: Notifier,
{
    #[instrument(skip(self, image), fields(file_name = %image.file_name))]
    async fn analyze(&self, image: ImageUpload) -> Result<AnalysisResult, CoreError> {
        let image_url = image.to_image_reference();

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {}
            _ = self.interrupt.notified() => {
                warn!("simulated analysis interrupted");
                self.notifier
                    .notify(Notification::analysis_failed(INTERRUPTED_MESSAGE));
                return Err(CoreError::ServiceError(INTERRUPTED_MESSAGE.to_string()));
            }
        }

        let dataset = CannedDataset::for_file_name(&image.file_name);
        debug!(?dataset, "serving canned analysis");

        Ok(dataset.into_result(image_url))
    }
}
