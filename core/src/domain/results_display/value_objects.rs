use serde::Serialize;

use crate::domain::food_analysis::entities::NutritionFacts;

/// The six nutrients shown on the results view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbohydrates",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }

    /// General daily value used as the 100% mark.
    pub fn daily_reference(self) -> f64 {
        match self {
            Nutrient::Calories => 2000.0,
            Nutrient::Protein => 50.0,
            Nutrient::Carbs => 275.0,
            Nutrient::Fat => 78.0,
            Nutrient::Fiber => 28.0,
            Nutrient::Sugar => 50.0,
        }
    }

    pub fn value_in(self, facts: &NutritionFacts) -> f64 {
        match self {
            Nutrient::Calories => facts.calories,
            Nutrient::Protein => facts.protein,
            Nutrient::Carbs => facts.carbs,
            Nutrient::Fat => facts.fat,
            Nutrient::Fiber => facts.fiber,
            Nutrient::Sugar => facts.sugar,
        }
    }
}

/// Share of the daily value, rounded to the nearest integer and capped at 100.
pub fn get_percentage(value: f64, nutrient: Nutrient) -> u8 {
    let percentage = (100.0 * value / nutrient.daily_reference()).min(100.0).round();
    // NaN and negatives collapse to 0 through the saturating cast.
    percentage as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthScoreColor {
    Green,
    Amber,
    Red,
}

impl HealthScoreColor {
    pub fn from_score(score: i32) -> Self {
        if score >= 8 {
            HealthScoreColor::Green
        } else if score >= 5 {
            HealthScoreColor::Amber
        } else {
            HealthScoreColor::Red
        }
    }
}

/// Confidence badge value, `0.93` becomes `93`.
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence * 100.0).clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_reference_points() {
        assert_eq!(get_percentage(2000.0, Nutrient::Calories), 100);
        assert_eq!(get_percentage(100.0, Nutrient::Protein), 100);
        assert_eq!(get_percentage(25.0, Nutrient::Protein), 50);
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        // 285 / 2000 = 14.25%
        assert_eq!(get_percentage(285.0, Nutrient::Calories), 14);
        // 10 / 78 = 12.82%
        assert_eq!(get_percentage(10.0, Nutrient::Fat), 13);
        // 7 / 28 = 25%
        assert_eq!(get_percentage(7.0, Nutrient::Fiber), 25);
    }

    #[test]
    fn test_percentage_never_exceeds_hundred() {
        for nutrient in Nutrient::ALL {
            let huge = nutrient.daily_reference() * 7.5;
            assert_eq!(get_percentage(huge, nutrient), 100);
        }
        assert_eq!(get_percentage(0.0, Nutrient::Sugar), 0);
        assert_eq!(get_percentage(f64::NAN, Nutrient::Sugar), 0);
    }

    #[test]
    fn test_health_score_colors() {
        assert_eq!(HealthScoreColor::from_score(8), HealthScoreColor::Green);
        assert_eq!(HealthScoreColor::from_score(10), HealthScoreColor::Green);
        assert_eq!(HealthScoreColor::from_score(7), HealthScoreColor::Amber);
        assert_eq!(HealthScoreColor::from_score(5), HealthScoreColor::Amber);
        assert_eq!(HealthScoreColor::from_score(4), HealthScoreColor::Red);
        assert_eq!(HealthScoreColor::from_score(0), HealthScoreColor::Red);
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(confidence_percent(0.95), 95);
        assert_eq!(confidence_percent(0.925), 93);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(1.4), 100);
    }
}
