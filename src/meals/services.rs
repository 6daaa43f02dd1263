use anyhow::Context;
use bytes::Bytes;

use super::{dto::CreateMealRequest, model::Meal};
use crate::{error::MealError, state::AppState};

pub fn meal_from_request(req: CreateMealRequest) -> Result<Meal, MealError> {
    Meal::new(req.name, req.photo.map(Bytes::from), req.rating)
}

/// Meal built from what is currently on screen: the name field and the
/// rating control.
pub async fn meal_from_screen(st: &AppState) -> Result<Meal, MealError> {
    let name = st.form.lock().await.text().to_string();
    let rating = st.rating.lock().await.rating();
    Meal::new(name, None, i64::from(rating))
}

pub async fn record_meal(st: &AppState, meal: &Meal) -> anyhow::Result<()> {
    st.archive.save(meal).await.context("archive meal")
}

pub async fn current_meal(st: &AppState) -> anyhow::Result<Option<Meal>> {
    st.archive.load().await.context("load archived meal")
}

pub async fn forget_meal(st: &AppState) -> anyhow::Result<()> {
    st.archive.remove().await.context("remove archived meal")
}
