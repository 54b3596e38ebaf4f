use crate::domain::food_analysis::{
    entities::{AnalysisResult, FoodIdentity, NutritionFacts, Recipe},
    value_objects::ImageReference,
};

/// Canned payloads served by the stub analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedDataset {
    MargheritaPizza,
    MediterraneanSalad,
    Generic,
}

impl CannedDataset {
    /// First match wins, in this order: `pizza`, `salad`, anything else.
    /// Matching ignores case.
    pub fn for_file_name(file_name: &str) -> Self {
        let file_name = file_name.to_lowercase();
        if file_name.contains("pizza") {
            CannedDataset::MargheritaPizza
        } else if file_name.contains("salad") {
            CannedDataset::MediterraneanSalad
        } else {
            CannedDataset::Generic
        }
    }

    pub fn into_result(self, image_url: ImageReference) -> AnalysisResult {
        let (food, nutrition, recipe) = match self {
            CannedDataset::MargheritaPizza => margherita_pizza(),
            CannedDataset::MediterraneanSalad => mediterranean_salad(),
            CannedDataset::Generic => generic(),
        };
        AnalysisResult::new(food, nutrition, recipe, image_url)
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn margherita_pizza() -> (FoodIdentity, NutritionFacts, Recipe) {
    (
        FoodIdentity::new(
            "Margherita Pizza",
            0.95,
            Some(
                "A classic Neapolitan pizza topped with tomato sauce, fresh mozzarella and basil."
                    .to_string(),
            ),
        ),
        NutritionFacts {
            calories: 285.0,
            protein: 12.0,
            carbs: 36.0,
            fat: 10.0,
            fiber: 2.5,
            sugar: 3.8,
            serving_size: "1 slice (107g)".to_string(),
        },
        Recipe {
            title: "Classic Margherita Pizza".to_string(),
            ingredients: lines(&[
                "Pizza dough (250g)",
                "San Marzano tomatoes, crushed (200g)",
                "Fresh mozzarella (125g)",
                "Fresh basil leaves (a handful)",
                "Extra virgin olive oil (1 tbsp)",
                "Salt to taste",
            ]),
            instructions: lines(&[
                "Preheat the oven to 250°C with a pizza stone inside.",
                "Stretch the dough into a thin 30cm round.",
                "Spread the crushed tomatoes evenly, leaving a border for the crust.",
                "Tear the mozzarella and scatter it over the sauce.",
                "Bake for 10-12 minutes until the crust is golden and the cheese bubbles.",
                "Top with fresh basil and a drizzle of olive oil before serving.",
            ]),
            prep_time: "20 min".to_string(),
            cook_time: "12 min".to_string(),
            healthy_score: 6,
        },
    )
}

fn mediterranean_salad() -> (FoodIdentity, NutritionFacts, Recipe) {
    (
        FoodIdentity::new(
            "Mediterranean Salad",
            0.92,
            Some(
                "A fresh salad of cucumber, tomato, olives and feta dressed with olive oil."
                    .to_string(),
            ),
        ),
        NutritionFacts {
            calories: 180.0,
            protein: 5.0,
            carbs: 12.0,
            fat: 14.0,
            fiber: 4.0,
            sugar: 6.0,
            serving_size: "1 bowl (200g)".to_string(),
        },
        Recipe {
            title: "Fresh Mediterranean Salad".to_string(),
            ingredients: lines(&[
                "Cucumber, diced (1 medium)",
                "Cherry tomatoes, halved (150g)",
                "Red onion, thinly sliced (1/2)",
                "Kalamata olives (50g)",
                "Feta cheese, crumbled (75g)",
                "Extra virgin olive oil (2 tbsp)",
                "Lemon juice (1 tbsp)",
                "Dried oregano (1 tsp)",
            ]),
            instructions: lines(&[
                "Combine the cucumber, tomatoes and onion in a large bowl.",
                "Add the olives and crumbled feta.",
                "Whisk the olive oil, lemon juice and oregano together.",
                "Pour the dressing over the salad and toss gently.",
                "Season with salt and pepper and serve chilled.",
            ]),
            prep_time: "15 min".to_string(),
            cook_time: "0 min".to_string(),
            healthy_score: 9,
        },
    )
}

fn generic() -> (FoodIdentity, NutritionFacts, Recipe) {
    (
        FoodIdentity::new(
            "Food Item",
            0.75,
            Some("This appears to be a food item, a popular dish.".to_string()),
        ),
        NutritionFacts {
            calories: 250.0,
            protein: 8.0,
            carbs: 30.0,
            fat: 12.0,
            fiber: 3.0,
            sugar: 5.0,
            serving_size: "1 serving (100g)".to_string(),
        },
        Recipe {
            title: "Food Item Recipe".to_string(),
            ingredients: lines(&[
                "Main ingredient (200g)",
                "Secondary ingredient (100g)",
                "Seasonings to taste",
                "Olive oil (1 tbsp)",
            ]),
            instructions: lines(&[
                "Prepare all ingredients as directed.",
                "Combine ingredients in a suitable cooking vessel.",
                "Cook according to typical preparation method.",
                "Serve and enjoy.",
            ]),
            prep_time: "15 min".to_string(),
            cook_time: "20 min".to_string(),
            healthy_score: 7,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_file_name() {
        assert_eq!(
            CannedDataset::for_file_name("my_pizza_photo.jpg"),
            CannedDataset::MargheritaPizza
        );
        assert_eq!(
            CannedDataset::for_file_name("greek_salad.png"),
            CannedDataset::MediterraneanSalad
        );
        assert_eq!(
            CannedDataset::for_file_name("random.jpg"),
            CannedDataset::Generic
        );
        assert_eq!(CannedDataset::for_file_name(""), CannedDataset::Generic);
    }

    #[test]
    fn test_dispatch_ignores_case() {
        assert_eq!(
            CannedDataset::for_file_name("PIZZA.JPG"),
            CannedDataset::MargheritaPizza
        );
        assert_eq!(
            CannedDataset::for_file_name("Caesar-Salad.webp"),
            CannedDataset::MediterraneanSalad
        );
    }

    #[test]
    fn test_pizza_wins_over_salad() {
        assert_eq!(
            CannedDataset::for_file_name("salad_and_pizza.jpg"),
            CannedDataset::MargheritaPizza
        );
        assert_eq!(
            CannedDataset::for_file_name("pizza_salad.jpg"),
            CannedDataset::MargheritaPizza
        );
    }

    #[test]
    fn test_dataset_headline_values() {
        let image = ImageReference::new("data:image/jpeg;base64,");
        let cases = [
            (CannedDataset::MargheritaPizza, "Margherita Pizza", 285.0, 6),
            (CannedDataset::MediterraneanSalad, "Mediterranean Salad", 180.0, 9),
            (CannedDataset::Generic, "Food Item", 250.0, 7),
        ];

        for (dataset, name, calories, score) in cases {
            let result = dataset.into_result(image.clone());
            assert_eq!(result.food.name, name);
            assert_eq!(result.nutrition.calories, calories);
            assert_eq!(result.recipe.healthy_score, score);
            assert_eq!(result.image_url, image);
            assert!((0.0..=1.0).contains(&result.food.confidence));
        }
    }
}
