pub mod data;
pub mod entities;
pub mod matcher;
pub mod store;

pub use entities::*;
pub use matcher::{ConditionMatches, match_conditions};
pub use store::IngredientStore;
