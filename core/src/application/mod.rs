use tracing::info;

use crate::domain::{
    common::{AnalysisBackend, AnalysisConfig, FoodScanConfig, entities::app_errors::CoreError},
    food_analysis::{entities::AnalysisResult, ports::AnalysisService, value_objects::ImageUpload},
    notification::ports::Notifier,
    upload_flow::services::UploadFlow,
};
use crate::infrastructure::analysis::{RemoteAnalysisService, StubAnalysisService};

/// The analysis implementation chosen from configuration at start-up.
#[derive(Debug)]
pub enum FoodScanAnalyzer<N> {
    Remote(RemoteAnalysisService<N>),
    Stub(StubAnalysisService<N>),
}

impl<N> FoodScanAnalyzer<N> {
    pub fn backend(&self) -> AnalysisBackend {
        match self {
            FoodScanAnalyzer::Remote(_) => AnalysisBackend::Remote,
            FoodScanAnalyzer::Stub(_) => AnalysisBackend::Stub,
        }
    }
}

impl<N> AnalysisService for FoodScanAnalyzer<N>
where
    N: Notifier,
{
    async fn analyze(&self, image: ImageUpload) -> Result<AnalysisResult, CoreError> {
        match self {
            FoodScanAnalyzer::Remote(service) => service.analyze(image).await,
            FoodScanAnalyzer::Stub(service) => service.analyze(image).await,
        }
    }
}

pub type FoodScanUploadFlow<N> = UploadFlow<FoodScanAnalyzer<N>, N>;

pub fn create_analysis_service<N>(
    config: &AnalysisConfig,
    notifier: N,
) -> Result<FoodScanAnalyzer<N>, CoreError>
where
    N: Notifier,
{
    let analyzer = match config.backend {
        AnalysisBackend::Remote => FoodScanAnalyzer::Remote(RemoteAnalysisService::new(
            config.api_url.clone(),
            config.timeout,
            notifier,
        )?),
        AnalysisBackend::Stub => {
            FoodScanAnalyzer::Stub(StubAnalysisService::new(config.stub_delay, notifier))
        }
    };

    info!(backend = ?analyzer.backend(), "analysis service ready");
    Ok(analyzer)
}

pub fn create_upload_flow<N>(
    config: &FoodScanConfig,
    notifier: N,
) -> Result<FoodScanUploadFlow<N>, CoreError>
where
    N: Notifier + Clone,
{
    let analyzer = create_analysis_service(&config.analysis, notifier.clone())?;
    Ok(UploadFlow::new(analyzer, notifier))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::infrastructure::notification::ChannelNotifier;

    #[test]
    fn test_backend_follows_configuration() {
        let (notifier, _receiver) = ChannelNotifier::new();

        let stub = create_analysis_service(&AnalysisConfig::default(), notifier.clone()).unwrap();
        assert_eq!(stub.backend(), AnalysisBackend::Stub);

        let remote = create_analysis_service(
            &AnalysisConfig {
                backend: AnalysisBackend::Remote,
                timeout: Some(Duration::from_secs(30)),
                ..AnalysisConfig::default()
            },
            notifier,
        )
        .unwrap();
        assert_eq!(remote.backend(), AnalysisBackend::Remote);
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_flow_runs_end_to_end() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        let config = FoodScanConfig {
            analysis: AnalysisConfig::default(),
        };
        let mut flow = create_upload_flow(&config, notifier).unwrap();

        let rejected = flow
            .submit(ImageUpload::new("notes.txt", "text/plain", "not an image"))
            .await;
        assert!(matches!(rejected, Err(CoreError::InvalidInput(_))));
        assert_eq!(receiver.recv().await.unwrap().title, "Invalid file type");

        let result = flow
            .submit(ImageUpload::new("greek_salad.png", "image/png", vec![9]))
            .await
            .unwrap();
        assert_eq!(result.food.name, "Mediterranean Salad");
        assert!(receiver.try_recv().is_err());
    }
}
