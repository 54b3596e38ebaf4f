use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the analysis believes is on the plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodIdentity {
    pub name: String,
    /// Between 0.0 and 1.0 inclusive.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FoodIdentity {
    pub fn new(name: impl Into<String>, confidence: f64, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            confidence,
            description,
        }
    }
}
