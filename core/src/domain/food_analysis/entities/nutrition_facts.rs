use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition values for one serving. Masses are grams, energy is kcal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub serving_size: String,
}
