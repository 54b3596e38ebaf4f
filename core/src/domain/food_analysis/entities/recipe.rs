use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    /// Execution order.
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    /// Expected 1-10, not enforced.
    pub healthy_score: i32,
}
