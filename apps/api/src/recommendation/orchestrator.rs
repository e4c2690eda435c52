//! Recommendation Orchestrator: composes the pipeline.
//!
//! Flow: build_prompt → llm.generate → parse_recommendation → result.
//!
//! Only `PromptError` escapes to the caller. A missing credential, any upstream
//! failure, or unusable model output is answered with the fallback generator,
//! so the caller always gets a structurally valid result.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::recommendation::fallback::fallback_recommendations;
use crate::recommendation::models::{
    AircraftContext, FlightContext, RecommendationResult, UserPreferences,
};
use crate::recommendation::parser::parse_recommendation;
use crate::recommendation::prompt_builder::build_prompt;

/// Runs the recommendation pipeline for one request.
///
/// The parsed model result is returned as-is: the 3-seat cap, score bounds and
/// best-seat consistency are requested in the prompt but not re-checked here.
pub async fn recommend_seats(
    llm: &LlmClient,
    flight: &FlightContext,
    aircraft: &AircraftContext,
    preferences: &UserPreferences,
    custom_prompt: Option<&str>,
) -> Result<RecommendationResult, AppError> {
    // Step 1: Prompt (oversized prompts are the caller's problem)
    let prompt = build_prompt(flight, aircraft, preferences, custom_prompt)?;
    debug!("Recommendation prompt ({} bytes):\n{}", prompt.len(), prompt);

    // Step 2: Model call
    let generated = match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Seat recommendation model unavailable, serving fallback: {e}");
            let reason = e.to_string();
            return Ok(fallback_recommendations(preferences, Some(reason.as_str())));
        }
    };
    debug!("Raw model output: {generated}");

    // Step 3: Parse
    match parse_recommendation(&generated) {
        Ok(result) => {
            info!(
                "Model recommended {} seats, best seat {}",
                result.recommended_seats.len(),
                result.best_seat
            );
            Ok(result)
        }
        Err(e) => {
            warn!("Could not use model output, serving fallback: {e}");
            Ok(fallback_recommendations(preferences, None))
        }
    }
}
