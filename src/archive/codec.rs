use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ArchiveError, meals::model::Meal};

/// Encode/decode capability for values kept in an archive.
pub trait Codec<T> {
    fn encode(&self, value: &T) -> Result<Vec<u8>, ArchiveError>;
    fn decode(&self, bytes: &[u8]) -> Result<T, ArchiveError>;
}

/// On-disk shape of a meal: three named fields.
#[derive(Debug, Serialize, Deserialize)]
struct ArchivedMeal {
    name: Option<String>,
    #[serde(default, with = "serde_bytes")]
    photo: Option<Vec<u8>>,
    #[serde(default)]
    rating: i64,
}

/// JSON codec for [`Meal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MealCodec;

impl Codec<Meal> for MealCodec {
    fn encode(&self, meal: &Meal) -> Result<Vec<u8>, ArchiveError> {
        let archived = ArchivedMeal {
            name: Some(meal.name().to_owned()),
            photo: meal.photo().map(|p| p.to_vec()),
            rating: i64::from(meal.rating()),
        };
        Ok(serde_json::to_vec(&archived)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Meal, ArchiveError> {
        let archived: ArchivedMeal = serde_json::from_slice(bytes)?;
        let Some(name) = archived.name else {
            debug!("unable to decode the name for a meal object");
            return Err(ArchiveError::MissingName);
        };
        let meal = Meal::new(name, archived.photo.map(Bytes::from), archived.rating)?;
        Ok(meal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MealError;

    #[test]
    fn encode_then_decode_keeps_fields() {
        let meal = Meal::new("Pasta with Meatballs", Some(Bytes::from_static(&[0, 1, 254, 255])), 3)
            .unwrap();
        let bytes = MealCodec.encode(&meal).unwrap();
        assert_eq!(MealCodec.decode(&bytes).unwrap(), meal);
    }

    #[test]
    fn archive_uses_named_fields() {
        let meal = Meal::new("Soup", None, 2).unwrap();
        let value: serde_json::Value =
            serde_json::from_slice(&MealCodec.encode(&meal).unwrap()).unwrap();
        assert_eq!(value["name"], "Soup");
        assert!(value["photo"].is_null());
        assert_eq!(value["rating"], 2);
    }

    #[test]
    fn missing_name_fails() {
        let err = MealCodec.decode(br#"{"rating": 3}"#).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingName));
    }

    #[test]
    fn missing_rating_and_photo_default() {
        let meal = MealCodec.decode(br#"{"name": "Toast"}"#).unwrap();
        assert_eq!(meal.rating(), 0);
        assert!(meal.photo().is_none());
    }

    #[test]
    fn out_of_range_rating_fails_validation() {
        let err = MealCodec.decode(br#"{"name": "Toast", "rating": 9}"#).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::InvalidMeal(MealError::RatingOutOfRange(9))
        ));
    }

    #[test]
    fn empty_name_fails_validation() {
        let err = MealCodec.decode(br#"{"name": "", "rating": 1}"#).unwrap_err();
        assert!(matches!(err, ArchiveError::InvalidMeal(MealError::EmptyName)));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = MealCodec.decode(b"\x00not json").unwrap_err();
        assert!(matches!(err, ArchiveError::Malformed(_)));
    }
}
