use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use foodscan_core::domain::food_analysis::{
    entities::AnalysisResult, policies::ensure_image_media_type, ports::AnalysisService,
    value_objects::ImageUpload,
};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorBody},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const MISSING_IMAGE_MESSAGE: &str = "No image provided";

fn image_too_large() -> ApiError {
    ApiError::PayloadTooLarge(format!(
        "Image too large. Max size is {} bytes",
        MAX_IMAGE_SIZE
    ))
}

/// Bodies over the route's limit surface as multipart errors carrying 413.
fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("{}: body exceeds limit", context);
        return image_too_large();
    }

    error!("{}: {}", context, e);
    ApiError::BadRequest(format!("{}: {}", context, e))
}

/// Multipart body of `POST /analyze`, for the OpenAPI document only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze a food image",
    description = "Identifies the food in an uploaded image, with nutrition facts and a recipe.",
    request_body(content = AnalyzeImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResult),
        (status = 400, description = "Missing or non-image upload", body = ErrorBody),
        (status = 413, description = "Image too large", body = ErrorBody),
        (status = 500, description = "Analysis failed", body = ErrorBody)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalysisResult>, ApiError> {
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let media_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read image", e))?;

        if data.is_empty() {
            warn!(file_name = %file_name, "Empty image upload attempted");
            return Err(ApiError::BadRequest(MISSING_IMAGE_MESSAGE.to_string()));
        }

        if data.len() > MAX_IMAGE_SIZE {
            return Err(image_too_large());
        }

        upload = Some(ImageUpload::new(file_name, media_type, data));
    }

    let upload = upload.ok_or_else(|| ApiError::BadRequest(MISSING_IMAGE_MESSAGE.to_string()))?;

    ensure_image_media_type(&upload.media_type)?;

    let file_name = upload.file_name.clone();
    let result = state
        .analysis_service
        .analyze(upload)
        .await
        .map_err(|e| {
            error!(error = %e, file_name = %file_name, "Failed to analyze image");
            ApiError::from(e)
        })?;

    Ok(Response::OK(result))
}
