//! Axum route handlers for the AI recommendation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::recommendation::models::{RecommendationRequest, RecommendationResult};
use crate::recommendation::orchestrator::recommend_seats;
use crate::state::AppState;

/// POST /api/ai/recommendations
///
/// Runs the model-backed pipeline. Model failures are answered with the
/// fallback recommendation, so the only error statuses are 400 (missing or
/// malformed input) and 413 (prompt over budget).
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResult>, AppError> {
    let Json(request) = payload?;

    let (Some(flight), Some(aircraft), Some(preferences)) = (
        request.flight_data,
        request.aircraft_data,
        request.user_preferences,
    ) else {
        return Err(AppError::Validation(
            "Missing required data: flightData, aircraftData, or userPreferences".to_string(),
        ));
    };

    let result = recommend_seats(
        &state.llm,
        &flight,
        &aircraft,
        &preferences,
        request.custom_prompt.as_deref(),
    )
    .await?;

    Ok(Json(result))
}
