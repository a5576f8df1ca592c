//! Event recording, pagination, and ICS export endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use calentry_core::{EventRecord, Recurrence, ics};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            post(create_event).get(list_events).delete(clear_events),
        )
        .route("/events/{index}", delete(delete_event))
        .route("/export", get(export))
}

/// Request body for recording an event
#[derive(Deserialize)]
pub struct CreateEventRequest {
    /// Floating local time, e.g. "2025-03-20T15:00:00"
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Serialize)]
pub struct PageResponse {
    pub events: Vec<EventRecord>,
    pub total: usize,
}

/// POST /events - Record a new event
async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventRecord>), ApiError> {
    let record = EventRecord::new(req.start, req.end, req.recurrence, req.description)?;

    let mut store = state.store();
    store.add(record.clone())?;
    log::debug!("recorded event {} ({} total)", record.uid, store.len());

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /events?offset&limit - A page of recorded events
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<PageResponse> {
    let store = state.store();
    Json(PageResponse {
        events: store.page(query.offset, query.limit).to_vec(),
        total: store.len(),
    })
}

/// DELETE /events/:index - Remove one event
async fn delete_event(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ApiError> {
    match state.store().remove(index) {
        Some(removed) => {
            log::debug!("removed event {}", removed.uid);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::not_found(format!("No event at index {index}"))),
    }
}

/// DELETE /events - Clear the session
async fn clear_events(State(state): State<AppState>) -> StatusCode {
    state.store().clear();
    StatusCode::NO_CONTENT
}

/// GET /export - The full store as an events.ics download
async fn export(State(state): State<AppState>) -> Result<Response, ApiError> {
    let store = state.store();
    let document = ics::serialize(store.all())?;
    log::info!("exported {} events", store.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"events.ics\"",
            ),
        ],
        document,
    )
        .into_response())
}
