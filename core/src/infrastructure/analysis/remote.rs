use std::time::Duration;

use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AnalysisResult, FoodIdentity, NutritionFacts, Recipe},
        ports::AnalysisService,
        value_objects::{ImageReference, ImageUpload},
    },
    notification::{entities::Notification, ports::Notifier},
};

const FALLBACK_ERROR_MESSAGE: &str = "Failed to analyze image";
const INCOMPLETE_DATA_MESSAGE: &str = "Incomplete analysis data received";
const REQUIRED_FIELDS: [&str; 3] = ["food", "nutrition", "recipe"];

/// Analysis delegated to an HTTP endpoint at `{base_url}/analyze`.
#[derive(Debug, Clone)]
pub struct RemoteAnalysisService<N> {
    base_url: String,
    client: Client,
    notifier: N,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    food: FoodIdentity,
    nutrition: NutritionFacts,
    recipe: Recipe,
    image_url: Option<ImageReference>,
}

impl<N> RemoteAnalysisService<N>
where
    N: Notifier,
{
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        notifier: N,
    ) -> Result<Self, CoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            CoreError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            notifier,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    async fn call_analyze_api(&self, image: ImageUpload) -> Result<AnalysisResult, CoreError> {
        let local_reference = image.to_image_reference();

        let part = Part::bytes(image.data.to_vec())
            .file_name(image.file_name)
            .mime_str(&image.media_type)
            .map_err(|e| CoreError::ServiceError(format!("Invalid media type: {}", e)))?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Analysis API request failed: {}", e);
                CoreError::ServiceError(format!("Analysis API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Analysis API error: {} - {}", status, body);
            return Err(CoreError::ServiceError(error_message_from_body(&body)));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            error!("Failed to parse analysis response: {}", e);
            CoreError::ServiceError(format!("Failed to parse analysis response: {}", e))
        })?;

        parse_analysis_body(body, local_reference)
    }
}

/// Pulls the `error` field out of a failure body, falling back to a generic
/// message when the body is not JSON or the field is missing or empty.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

/// Checks that `food`, `nutrition` and `recipe` are all present before
/// decoding. When the response carries no image URL the local reference is
/// used instead.
fn parse_analysis_body(
    body: serde_json::Value,
    local_reference: ImageReference,
) -> Result<AnalysisResult, CoreError> {
    let complete = REQUIRED_FIELDS
        .iter()
        .all(|field| body.get(field).is_some_and(|value| !value.is_null()));
    if !complete {
        error!("Analysis response is missing required fields");
        return Err(CoreError::ServiceError(INCOMPLETE_DATA_MESSAGE.to_string()));
    }

    let parsed: AnalyzeResponse = serde_json::from_value(body).map_err(|e| {
        error!("Invalid analysis response format: {}", e);
        CoreError::ServiceError(format!("Invalid analysis response format: {}", e))
    })?;

    Ok(AnalysisResult::new(
        parsed.food,
        parsed.nutrition,
        parsed.recipe,
        parsed.image_url.unwrap_or(local_reference),
    ))
}

impl<N> AnalysisService for RemoteAnalysisService<N>
where
    N: Notifier,
{
    #[instrument(
        skip(self, image),
        fields(endpoint = %self.endpoint(), file_name = %image.file_name)
    )]
    async fn analyze(&self, image: ImageUpload) -> Result<AnalysisResult, CoreError> {
        self.notifier.notify(Notification::analyzing());

        match self.call_analyze_api(image).await {
            Ok(result) => {
                info!(food = %result.food.name, "remote analysis succeeded");
                Ok(result)
            }
            Err(e) => {
                error!("Error analyzing food image: {}", e);
                self.notifier
                    .notify(Notification::analysis_failed(e.to_string()));
                Err(e)
            }
        }
    }
}
