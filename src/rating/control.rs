use serde::Serialize;

use crate::{config::RatingConfig, error::RatingError};

pub const RESET_HINT: &str = "Tap to reset the rating to zero.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StarImage {
    EmptyStar,
    FilledStar,
    HighlightedStar,
}

/// Images for each button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarImages {
    pub normal: StarImage,
    pub selected: StarImage,
    pub highlighted: StarImage,
}

impl Default for StarImages {
    fn default() -> Self {
        Self {
            normal: StarImage::EmptyStar,
            selected: StarImage::FilledStar,
            highlighted: StarImage::HighlightedStar,
        }
    }
}

/// Presentation of one star button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarButton {
    pub position: u8,
    pub selected: bool,
    /// Image for the current state.
    pub image: StarImage,
    pub images: StarImages,
    pub width: f32,
    pub height: f32,
    pub accessibility_label: String,
    pub accessibility_hint: Option<&'static str>,
    pub accessibility_value: String,
}

/// A row of `star_count` toggles holding a rating in `0..=star_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingControl {
    rating: u8,
    star_count: u8,
    star_width: f32,
    star_height: f32,
}

impl Default for RatingControl {
    fn default() -> Self {
        let cfg = RatingConfig::default();
        Self {
            rating: 0,
            star_count: cfg.star_count,
            star_width: cfg.star_width,
            star_height: cfg.star_height,
        }
    }
}

impl RatingControl {
    pub fn from_config(cfg: &RatingConfig) -> Result<Self, RatingError> {
        let mut control = Self::default();
        control.set_star_count(cfg.star_count)?;
        control.set_star_size(cfg.star_width, cfg.star_height)?;
        Ok(control)
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn star_count(&self) -> u8 {
        self.star_count
    }

    pub fn star_size(&self) -> (f32, f32) {
        (self.star_width, self.star_height)
    }

    /// Tapping the star that equals the current rating clears it,
    /// any other star sets the rating to its position.
    pub fn tap(&mut self, position: i64) -> Result<u8, RatingError> {
        let position = match u8::try_from(position) {
            Ok(p) if (1..=self.star_count).contains(&p) => p,
            _ => {
                return Err(RatingError::UnknownPosition {
                    position,
                    star_count: self.star_count,
                })
            }
        };
        self.rating = if self.rating == position { 0 } else { position };
        Ok(self.rating)
    }

    /// Changes the number of stars; the rating is clamped to the new count.
    pub fn set_star_count(&mut self, star_count: u8) -> Result<(), RatingError> {
        if star_count == 0 {
            return Err(RatingError::InvalidConfig(
                "star count must be at least 1".into(),
            ));
        }
        self.star_count = star_count;
        self.rating = self.rating.min(star_count);
        Ok(())
    }

    pub fn set_star_size(&mut self, width: f32, height: f32) -> Result<(), RatingError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RatingError::InvalidConfig(format!(
                "star size must be positive, got {}x{}",
                width, height
            )));
        }
        self.star_width = width;
        self.star_height = height;
        Ok(())
    }

    pub fn summary(&self) -> String {
        rating_summary(self.rating)
    }

    pub fn render(&self) -> Vec<StarButton> {
        let value = self.summary();
        (1..=self.star_count)
            .map(|position| {
                let selected = position <= self.rating;
                let images = StarImages::default();
                StarButton {
                    position,
                    selected,
                    image: if selected { images.selected } else { images.normal },
                    images,
                    width: self.star_width,
                    height: self.star_height,
                    accessibility_label: format!("Set {} star rating", position),
                    accessibility_hint: (position == self.rating).then_some(RESET_HINT),
                    accessibility_value: value.clone(),
                }
            })
            .collect()
    }
}

pub fn rating_summary(rating: u8) -> String {
    match rating {
        0 => "No rating set.".to_string(),
        1 => "1 star set.".to_string(),
        n => format!("{} stars set.", n),
    }
}
