use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::AnalysisResult, value_objects::ImageUpload},
};

/// Turns an uploaded image into an [`AnalysisResult`].
///
/// One call per invocation, no retries. Callers are expected to have checked
/// the declared media type with
/// [`ensure_image_media_type`](crate::domain::food_analysis::policies::ensure_image_media_type);
/// implementations do not look at the bytes.
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        image: ImageUpload,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
