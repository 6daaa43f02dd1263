use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{debug, instrument};

use super::dto::{EditRequest, FormView};
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/form", get(get_form))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/form/text", put(edit_text))
        .route("/form/default", post(set_default_text))
        .route("/form/return", post(return_key))
}

#[instrument(skip(state))]
pub async fn get_form(State(state): State<AppState>) -> Json<FormView> {
    Json(FormView::from(&*state.form.lock().await))
}

#[instrument(skip(state, body))]
pub async fn edit_text(
    State(state): State<AppState>,
    Json(body): Json<EditRequest>,
) -> Json<FormView> {
    let mut form = state.form.lock().await;
    form.edit(body.text);
    Json(FormView::from(&*form))
}

#[instrument(skip(state))]
pub async fn set_default_text(State(state): State<AppState>) -> Json<FormView> {
    let mut form = state.form.lock().await;
    form.set_default();
    Json(FormView::from(&*form))
}

#[instrument(skip(state))]
pub async fn return_key(State(state): State<AppState>) -> Json<FormView> {
    let mut form = state.form.lock().await;
    form.should_return();
    debug!(label = %form.label(), "editing ended");
    Json(FormView::from(&*form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_text_reaches_label_on_return() {
        let state = AppState::fake();
        let Json(view) = set_default_text(State(state.clone())).await;
        assert_eq!(view.text, "Default Text");
        assert_eq!(view.label, "");

        let Json(view) = return_key(State(state)).await;
        assert_eq!(view.label, "Default Text");
    }

    #[tokio::test]
    async fn edits_are_kept_in_the_field() {
        let state = AppState::fake();
        edit_text(State(state.clone()), Json(EditRequest { text: "Tacos".into() })).await;
        let Json(view) = get_form(State(state)).await;
        assert_eq!(view.text, "Tacos");
        assert_eq!(view.label, "");
    }
}
