pub mod analysis_result;
pub mod food_identity;
pub mod nutrition_facts;
pub mod recipe;

pub use analysis_result::*;
pub use food_identity::*;
pub use nutrition_facts::*;
pub use recipe::*;
