use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::flight::{Flight, FlightDetail, NewFlight};
use crate::state::AppState;

/// GET /api/flights
pub async fn handle_list_flights(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlightDetail>>, AppError> {
    Ok(Json(state.store.list_flights().await?))
}

/// GET /api/flights/:id
pub async fn handle_get_flight(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<FlightDetail>, AppError> {
    let Path(id) = id?;
    let flight = state
        .store
        .find_flight(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;
    Ok(Json(flight))
}

/// GET /api/flights/route/:departure/:arrival
///
/// Exact city-name match on both ends. An unknown route is an empty list.
pub async fn handle_flights_by_route(
    State(state): State<AppState>,
    cities: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Vec<FlightDetail>>, AppError> {
    let Path((departure, arrival)) = cities?;
    Ok(Json(
        state
            .store
            .find_flights_by_route(&departure, &arrival)
            .await?,
    ))
}

/// POST /api/flights
pub async fn handle_create_flight(
    State(state): State<AppState>,
    payload: Result<Json<NewFlight>, JsonRejection>,
) -> Result<(StatusCode, Json<Flight>), AppError> {
    let Json(flight) = payload?;
    flight.validate().map_err(AppError::Validation)?;

    let created = state.store.create_flight(flight).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
