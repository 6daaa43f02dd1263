use serde::{Deserialize, Serialize};

use super::control::{RatingControl, StarButton};

#[derive(Debug, Serialize)]
pub struct RatingView {
    pub rating: u8,
    pub star_count: u8,
    pub summary: String,
    pub buttons: Vec<StarButton>,
}

impl From<&RatingControl> for RatingView {
    fn from(c: &RatingControl) -> Self {
        Self {
            rating: c.rating(),
            star_count: c.star_count(),
            summary: c.summary(),
            buttons: c.render(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TapRequest {
    pub position: i64,
}

#[derive(Debug, Deserialize)]
pub struct ConfigureRequest {
    pub star_count: Option<u8>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}
