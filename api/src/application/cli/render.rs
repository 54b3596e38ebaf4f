use std::fmt;

use foodscan_core::domain::{
    notification::entities::Notification,
    results_display::{HealthScoreColor, ResultsView},
};

const BAR_WIDTH: usize = 20;

/// Plain-text rendering of a [`ResultsView`] for the terminal.
pub struct TerminalView<'a>(pub &'a ResultsView);

/// One notification as a single terminal line.
pub struct NotificationLine<'a>(pub &'a Notification);

fn bar(percentage: u8) -> String {
    let filled = (usize::from(percentage) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

fn color_label(color: HealthScoreColor) -> &'static str {
    match color {
        HealthScoreColor::Green => "green",
        HealthScoreColor::Amber => "amber",
        HealthScoreColor::Red => "red",
    }
}

impl fmt::Display for TerminalView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(
            f,
            "{}  ({}% confidence)",
            view.food.name, view.food.confidence_percent
        )?;
        if let Some(description) = &view.food.description {
            writeln!(f, "{}", description)?;
        }
        writeln!(f)?;

        writeln!(f, "{} kcal", view.calories)?;
        writeln!(f, "Per {}", view.serving_size)?;
        writeln!(f)?;

        writeln!(f, "Nutrition")?;
        for row in &view.nutrition {
            let amount = format!("{} {}", row.value, row.unit);
            writeln!(
                f,
                "  {:<14} {:>10}  {} {:>3}% daily value",
                row.label,
                amount,
                bar(row.percentage),
                row.percentage
            )?;
        }
        writeln!(f)?;

        let recipe = &view.recipe;
        writeln!(
            f,
            "Recipe: {}  (health score {}/10, {})",
            recipe.title,
            recipe.health_score,
            color_label(recipe.health_color)
        )?;
        writeln!(f, "  Prep: {}  Cook: {}", recipe.prep_time, recipe.cook_time)?;
        writeln!(f)?;

        writeln!(f, "Ingredients")?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }
        writeln!(f)?;

        writeln!(f, "Instructions")?;
        for step in &recipe.steps {
            writeln!(f, "  {}. {}", step.number, step.text)?;
        }

        Ok(())
    }
}

impl fmt::Display for NotificationLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.0.is_destructive() { "!" } else { "*" };
        write!(f, "{} {}: {}", marker, self.0.title, self.0.description)
    }
}

#[cfg(test)]
mod tests {
    use foodscan_core::{
        domain::food_analysis::value_objects::ImageReference,
        infrastructure::analysis::datasets::CannedDataset,
    };

    use super::*;

    fn pizza_view() -> ResultsView {
        let reference = ImageReference::new("data:image/jpeg;base64,");
        let result = CannedDataset::MargheritaPizza.into_result(reference);
        ResultsView::render(&result)
    }

    #[test]
    fn test_bar_is_scaled_to_width() {
        assert_eq!(bar(0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(bar(100), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn test_results_view_text() {
        let text = TerminalView(&pizza_view()).to_string();

        assert!(text.starts_with("Margherita Pizza  (95% confidence)"));
        assert!(text.contains("285 kcal"));
        assert!(text.contains("Per 1 slice (107g)"));
        assert!(text.contains("Carbohydrates"));
        assert!(text.contains("(health score 6/10, amber)"));
        assert!(text.contains("  1. "));
    }

    #[test]
    fn test_instructions_are_numbered_in_order() {
        let view = pizza_view();
        let text = TerminalView(&view).to_string();

        let mut last = 0;
        for step in &view.recipe.steps {
            let line = format!("  {}. {}", step.number, step.text);
            let position = text.find(&line).unwrap();
            assert!(position > last);
            last = position;
        }
    }

    #[test]
    fn test_notification_line() {
        let failed = Notification::analysis_failed("model unavailable");
        let line = NotificationLine(&failed).to_string();
        assert_eq!(line, "! Error analyzing image: model unavailable");

        let line = NotificationLine(&Notification::analyzing()).to_string();
        assert_eq!(
            line,
            "* Analyzing image...: Please wait while we process your food image."
        );
    }
}
