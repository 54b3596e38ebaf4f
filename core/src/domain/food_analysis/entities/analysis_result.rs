use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::{
    entities::{FoodIdentity, NutritionFacts, Recipe},
    value_objects::ImageReference,
};

/// Outcome of one completed analysis.
///
/// Built once by an [`AnalysisService`](crate::domain::food_analysis::ports::AnalysisService)
/// and handed by value to the results view. Nothing keeps a copy of it, so
/// it lives exactly as long as the navigation from upload to results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub food: FoodIdentity,
    pub nutrition: NutritionFacts,
    pub recipe: Recipe,
    pub image_url: ImageReference,
}

impl AnalysisResult {
    pub fn new(
        food: FoodIdentity,
        nutrition: NutritionFacts,
        recipe: Recipe,
        image_url: ImageReference,
    ) -> Self {
        Self {
            food,
            nutrition,
            recipe,
            image_url,
        }
    }
}
