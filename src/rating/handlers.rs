use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{ConfigureRequest, RatingView, TapRequest};
use crate::{error::RatingError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/rating", get(get_rating))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/rating/tap", post(tap_star))
        .route("/rating/config", put(configure))
}

#[instrument(skip(state))]
pub async fn get_rating(State(state): State<AppState>) -> Json<RatingView> {
    let control = state.rating.lock().await;
    Json(RatingView::from(&*control))
}

#[instrument(skip(state))]
pub async fn tap_star(
    State(state): State<AppState>,
    Json(body): Json<TapRequest>,
) -> Result<Json<RatingView>, (StatusCode, String)> {
    let mut control = state.rating.lock().await;
    let rating = control.tap(body.position).map_err(bad_request)?;
    info!(position = body.position, rating, "star tapped");
    Ok(Json(RatingView::from(&*control)))
}

#[instrument(skip(state))]
pub async fn configure(
    State(state): State<AppState>,
    Json(body): Json<ConfigureRequest>,
) -> Result<Json<RatingView>, (StatusCode, String)> {
    let mut control = state.rating.lock().await;
    let mut next = control.clone();
    if let Some(n) = body.star_count {
        next.set_star_count(n).map_err(bad_request)?;
    }
    if body.width.is_some() || body.height.is_some() {
        let (w, h) = next.star_size();
        next.set_star_size(body.width.unwrap_or(w), body.height.unwrap_or(h))
            .map_err(bad_request)?;
    }
    *control = next;
    info!(star_count = control.star_count(), rating = control.rating(), "rating control reconfigured");
    Ok(Json(RatingView::from(&*control)))
}

fn bad_request(e: RatingError) -> (StatusCode, String) {
    warn!(error = %e, "rating request rejected");
    (StatusCode::BAD_REQUEST, e.to_string())
}
