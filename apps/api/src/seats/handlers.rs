use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::aircraft::{Aircraft, NewAircraft, Seat};
use crate::recommendation::models::Preference;
use crate::seats::filter::filter_seats;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatFilterRequest {
    pub aircraft_id: Uuid,
    pub preference: Preference,
    /// Accepted for client compatibility; the filter rules ignore it.
    #[serde(default)]
    #[allow(dead_code)]
    pub flight_direction: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub departure_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeatFilterResponse {
    pub aircraft: String,
    pub preference: Preference,
    pub recommendations: Vec<Seat>,
}

/// GET /api/seats/aircraft
pub async fn handle_list_aircraft(
    State(state): State<AppState>,
) -> Result<Json<Vec<Aircraft>>, AppError> {
    Ok(Json(state.store.list_aircraft().await?))
}

/// GET /api/seats/aircraft/:id
pub async fn handle_get_aircraft(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Aircraft>, AppError> {
    let Path(id) = id?;
    let aircraft = state
        .store
        .find_aircraft(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Aircraft not found".to_string()))?;
    Ok(Json(aircraft))
}

/// POST /api/seats/aircraft
pub async fn handle_create_aircraft(
    State(state): State<AppState>,
    payload: Result<Json<NewAircraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Aircraft>), AppError> {
    let Json(aircraft) = payload?;
    aircraft.validate().map_err(AppError::Validation)?;

    let created = state.store.create_aircraft(aircraft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/seats/recommendations
///
/// Rule-based filter only; see `POST /api/ai/recommendations` for the
/// model-backed path.
pub async fn handle_filter_seats(
    State(state): State<AppState>,
    payload: Result<Json<SeatFilterRequest>, JsonRejection>,
) -> Result<Json<SeatFilterResponse>, AppError> {
    let Json(request) = payload?;

    let aircraft = state
        .store
        .find_aircraft(request.aircraft_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Aircraft not found".to_string()))?;

    let recommendations = filter_seats(&aircraft.seats, &request.preference);
    info!(
        "Filtered {} {} seats on aircraft {}",
        recommendations.len(),
        request.preference,
        aircraft.id
    );

    Ok(Json(SeatFilterResponse {
        aircraft: aircraft.model,
        preference: request.preference,
        recommendations,
    }))
}
