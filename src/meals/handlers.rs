use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use super::dto::{CreateMealRequest, MealResponse};
use super::services::{current_meal, forget_meal, meal_from_request, meal_from_screen, record_meal};
use crate::{error::MealError, state::AppState};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meal", get(get_meal).post(create_meal).delete(delete_meal))
        .route("/meal/from-screen", post(create_meal_from_screen))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // photos
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
) -> Result<Json<MealResponse>, (StatusCode, String)> {
    match current_meal(&state).await {
        Ok(Some(meal)) => Ok(Json(MealResponse::from(&meal))),
        Ok(None) => Err((StatusCode::NOT_FOUND, "No meal recorded".into())),
        Err(e) => {
            error!(error = ?e, "load meal failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(body): Json<CreateMealRequest>,
) -> Result<(StatusCode, Json<MealResponse>), (StatusCode, String)> {
    let meal = meal_from_request(body).map_err(invalid)?;
    store(&state, meal).await
}

#[instrument(skip(state))]
pub async fn create_meal_from_screen(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MealResponse>), (StatusCode, String)> {
    let meal = meal_from_screen(&state).await.map_err(invalid)?;
    store(&state, meal).await
}

#[instrument(skip(state))]
pub async fn delete_meal(State(state): State<AppState>) -> Result<StatusCode, (StatusCode, String)> {
    forget_meal(&state).await.map_err(internal)?;
    info!("meal forgotten");
    Ok(StatusCode::NO_CONTENT)
}

async fn store(
    state: &AppState,
    meal: super::model::Meal,
) -> Result<(StatusCode, Json<MealResponse>), (StatusCode, String)> {
    record_meal(state, &meal).await.map_err(internal)?;
    info!(name = %meal.name(), rating = meal.rating(), "meal recorded");
    Ok((StatusCode::CREATED, Json(MealResponse::from(&meal))))
}

fn invalid(e: MealError) -> (StatusCode, String) {
    warn!(error = %e, "invalid meal");
    (StatusCode::BAD_REQUEST, e.to_string())
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    error!(error = ?e, "meal archive failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, rating: i64) -> Json<CreateMealRequest> {
        Json(CreateMealRequest {
            name: name.into(),
            photo: None,
            rating,
        })
    }

    #[tokio::test]
    async fn empty_name_is_bad_request() {
        let state = AppState::fake();
        let (status, msg) = create_meal(State(state.clone()), request("", 3))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(msg.contains("name"));
        assert_eq!(get_meal(State(state)).await.unwrap_err().0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rating_six_is_bad_request() {
        let state = AppState::fake();
        let (status, _) = create_meal(State(state), request("Soup", 6))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn created_meal_is_archived() {
        let state = AppState::fake();
        let (status, Json(created)) = create_meal(State(state.clone()), request("Soup", 0))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.rating, 0);
        assert_eq!(created.rating_summary, "No rating set.");

        let Json(loaded) = get_meal(State(state.clone())).await.unwrap();
        assert_eq!(loaded.name, "Soup");

        assert_eq!(delete_meal(State(state.clone())).await.unwrap(), StatusCode::NO_CONTENT);
        assert_eq!(get_meal(State(state)).await.unwrap_err().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn photo_bytes_deserialize_from_json_array() {
        let body: CreateMealRequest =
            serde_json::from_str(r#"{"name":"Soup","photo":[137,80,78,71],"rating":1}"#).unwrap();
        assert_eq!(body.photo.as_deref(), Some(&[137u8, 80, 78, 71][..]));
    }
}
