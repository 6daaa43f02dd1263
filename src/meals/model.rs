use bytes::Bytes;

use crate::error::MealError;

pub const MAX_RATING: i64 = 5;

/// A recorded meal. Only obtainable through [`Meal::new`], so every
/// instance has a non-empty name and a rating in `0..=MAX_RATING`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    name: String,
    photo: Option<Bytes>,
    rating: u8,
}

impl Meal {
    pub fn new(
        name: impl Into<String>,
        photo: Option<Bytes>,
        rating: i64,
    ) -> Result<Self, MealError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MealError::EmptyName);
        }
        if !(0..=MAX_RATING).contains(&rating) {
            return Err(MealError::RatingOutOfRange(rating));
        }
        Ok(Self {
            name,
            photo,
            rating: rating as u8,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> Option<&Bytes> {
        self.photo.as_ref()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }
}
