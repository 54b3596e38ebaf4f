use serde::Serialize;

use crate::domain::{
    food_analysis::value_objects::ImageReference,
    results_display::value_objects::{HealthScoreColor, Nutrient},
};

/// Everything the results page shows, already computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub food: FoodSummary,
    /// Headline calorie figure.
    pub calories: f64,
    pub serving_size: String,
    pub nutrition: Vec<NutritionRow>,
    pub recipe: RecipeCard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodSummary {
    pub name: String,
    pub confidence_percent: u8,
    pub description: Option<String>,
    pub image_url: ImageReference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionRow {
    pub nutrient: Nutrient,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    /// Percentage of the daily value, 0 to 100.
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    pub title: String,
    pub health_score: i32,
    pub health_color: HealthScoreColor,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    /// 1-based.
    pub number: usize,
    pub text: String,
}
