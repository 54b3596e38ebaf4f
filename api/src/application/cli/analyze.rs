use anyhow::{Context, anyhow};
use foodscan_core::{
    application::create_upload_flow,
    domain::{
        common::FoodScanConfig, food_analysis::value_objects::ImageUpload,
        results_display::ResultsView, upload_flow::entities::UploadState,
    },
    infrastructure::notification::ChannelNotifier,
};
use tracing::{debug, info};

use crate::application::cli::{
    media_type::media_type_for_path,
    render::{NotificationLine, TerminalView},
};
use crate::args::AnalyzeArgs;

/// Runs one upload through the flow and prints the results view.
///
/// Notifications and progress go to stderr, the results to stdout.
pub async fn run_analyze(config: &FoodScanConfig, args: &AnalyzeArgs) -> Result<(), anyhow::Error> {
    let data = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let file_name = args
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let media_type = args
        .media_type
        .clone()
        .unwrap_or_else(|| media_type_for_path(&args.path).to_string());

    debug!(file_name = %file_name, media_type = %media_type, size = data.len(), "image loaded");

    let (notifier, mut notifications) = ChannelNotifier::new();
    let mut flow = create_upload_flow(config, notifier)?;

    let printer = tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            eprintln!("{}", NotificationLine(&notification));
        }
    });

    let mut states = flow.subscribe();
    let progress = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            if let UploadState::Analyzing { file_name } = state {
                eprintln!("Analyzing {}...", file_name);
            }
        }
    });

    let outcome = flow
        .submit(ImageUpload::new(file_name, media_type, data))
        .await;

    // Closes both channels so the printing tasks run to completion.
    drop(flow);
    printer.await?;
    progress.await?;

    let (result, failure) = match outcome {
        Ok(result) => (Some(result), None),
        Err(e) => (None, Some(e)),
    };

    let view = ResultsView::from_navigation(result).map_err(|e| match failure {
        Some(failure) => anyhow!("analysis of {} failed: {}", args.path.display(), failure),
        None => anyhow!(e),
    })?;

    info!(food = %view.food.name, "analysis displayed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", TerminalView(&view));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, time::Duration};

    use foodscan_core::domain::common::{AnalysisBackend, AnalysisConfig, FoodScanConfig};
    use tempfile::TempDir;

    use super::*;

    fn config() -> FoodScanConfig {
        FoodScanConfig {
            analysis: AnalysisConfig {
                backend: AnalysisBackend::Stub,
                stub_delay: Duration::ZERO,
                ..AnalysisConfig::default()
            },
        }
    }

    fn args(path: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            path,
            media_type: None,
            json: false,
        }
    }

    fn write_image(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        path
    }

    #[tokio::test]
    async fn test_analyze_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, "my_pizza_photo.jpg");

        run_analyze(&config(), &args(path)).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_image_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, "notes.txt");

        let err = run_analyze(&config(), &args(path)).await.unwrap_err();
        assert!(err.to_string().contains("Please select an image file"));
    }

    #[tokio::test]
    async fn test_media_type_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, "notes-as-image.txt");
        let mut args = args(path);
        args.media_type = Some("image/png".to_string());
        args.json = true;

        run_analyze(&config(), &args).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.jpg");

        let err = run_analyze(&config(), &args(path)).await.unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
