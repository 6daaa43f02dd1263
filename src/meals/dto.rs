use serde::{Deserialize, Serialize};

use super::model::Meal;
use crate::rating::control::rating_summary;

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    #[serde(default, with = "serde_bytes")]
    pub photo: Option<Vec<u8>>,
    #[serde(default)]
    pub rating: i64,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub name: String,
    #[serde(with = "serde_bytes")]
    pub photo: Option<Vec<u8>>,
    pub rating: u8,
    pub rating_summary: String,
}

impl From<&Meal> for MealResponse {
    fn from(m: &Meal) -> Self {
        Self {
            name: m.name().to_string(),
            photo: m.photo().map(|p| p.to_vec()),
            rating: m.rating(),
            rating_summary: rating_summary(m.rating()),
        }
    }
}
