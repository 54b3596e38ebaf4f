use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::{AnalysisResult, NutritionFacts, Recipe},
    results_display::{
        entities::{FoodSummary, InstructionStep, NutritionRow, RecipeCard, ResultsView},
        value_objects::{HealthScoreColor, Nutrient, confidence_percent, get_percentage},
    },
};

impl ResultsView {
    /// Entry point of the results page.
    ///
    /// Without a result there is nothing to show: the caller gets
    /// [`CoreError::MissingResult`] and is expected to go back to the upload
    /// view rather than report an error.
    pub fn from_navigation(result: Option<AnalysisResult>) -> Result<Self, CoreError> {
        match result {
            Some(result) => Ok(Self::render(&result)),
            None => {
                debug!("results view opened without a result, redirecting");
                Err(CoreError::MissingResult)
            }
        }
    }

    pub fn render(result: &AnalysisResult) -> Self {
        Self {
            food: FoodSummary {
                name: result.food.name.clone(),
                confidence_percent: confidence_percent(result.food.confidence),
                description: result.food.description.clone(),
                image_url: result.image_url.clone(),
            },
            calories: result.nutrition.calories,
            serving_size: result.nutrition.serving_size.clone(),
            nutrition: nutrition_rows(&result.nutrition),
            recipe: recipe_card(&result.recipe),
        }
    }
}

pub fn nutrition_rows(facts: &NutritionFacts) -> Vec<NutritionRow> {
    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let value = nutrient.value_in(facts);
            NutritionRow {
                nutrient,
                label: nutrient.label(),
                value,
                unit: nutrient.unit(),
                percentage: get_percentage(value, nutrient),
            }
        })
        .collect()
}

pub fn recipe_card(recipe: &Recipe) -> RecipeCard {
    RecipeCard {
        title: recipe.title.clone(),
        health_score: recipe.healthy_score,
        health_color: HealthScoreColor::from_score(recipe.healthy_score),
        prep_time: recipe.prep_time.clone(),
        cook_time: recipe.cook_time.clone(),
        ingredients: recipe.ingredients.clone(),
        steps: recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(index, text)| InstructionStep {
                number: index + 1,
                text: text.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_analysis::value_objects::ImageReference;
    use crate::infrastructure::analysis::datasets::CannedDataset;

    #[test]
    fn test_missing_result_redirects() {
        assert_eq!(
            ResultsView::from_navigation(None),
            Err(CoreError::MissingResult)
        );
    }

    #[test]
    fn test_render_pizza_view() {
        let reference = ImageReference::new("data:image/jpeg;base64,");
        let result = CannedDataset::MargheritaPizza.into_result(reference);
        let view = ResultsView::from_navigation(Some(result)).unwrap();

        assert_eq!(view.food.name, "Margherita Pizza");
        assert_eq!(view.food.confidence_percent, 95);
        assert_eq!(view.calories, 285.0);
        assert_eq!(view.serving_size, "1 slice (107g)");

        let labels: Vec<_> = view.nutrition.iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            ["Calories", "Protein", "Carbohydrates", "Fat", "Fiber", "Sugar"]
        );
        assert_eq!(view.nutrition[0].unit, "kcal");
        assert_eq!(view.nutrition[0].percentage, 14);
        assert!(view.nutrition.iter().all(|row| row.percentage <= 100));

        assert_eq!(view.recipe.health_score, 6);
        assert_eq!(view.recipe.health_color, HealthScoreColor::Amber);
    }

    #[test]
    fn test_steps_keep_execution_order() {
        let result =
            CannedDataset::MediterraneanSalad.into_result(ImageReference::new("blob:local"));
        let view = ResultsView::render(&result);

        assert_eq!(view.recipe.steps.len(), result.recipe.instructions.len());
        for (index, step) in view.recipe.steps.iter().enumerate() {
            assert_eq!(step.number, index + 1);
            assert_eq!(step.text, result.recipe.instructions[index]);
        }
        assert_eq!(view.recipe.ingredients, result.recipe.ingredients);
        assert_eq!(view.recipe.health_color, HealthScoreColor::Green);
    }
}
