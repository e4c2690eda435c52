pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flights::handlers as flights;
use crate::recommendation::handlers as recommendation;
use crate::seats::handlers as seats;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Flights
        .route(
            "/api/flights",
            get(flights::handle_list_flights).post(flights::handle_create_flight),
        )
        .route("/api/flights/:id", get(flights::handle_get_flight))
        .route(
            "/api/flights/route/:departure/:arrival",
            get(flights::handle_flights_by_route),
        )
        // Aircraft & rule-based seat filter
        .route(
            "/api/seats/aircraft",
            get(seats::handle_list_aircraft).post(seats::handle_create_aircraft),
        )
        .route("/api/seats/aircraft/:id", get(seats::handle_get_aircraft))
        .route(
            "/api/seats/recommendations",
            post(seats::handle_filter_seats),
        )
        // Model-backed recommendations
        .route(
            "/api/ai/recommendations",
            post(recommendation::handle_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, Environment};
    use crate::llm_client::LlmClient;
    use crate::store::memory::MemoryStore;

    fn test_state(llm_endpoint: &str, api_key: Option<&str>) -> AppState {
        let config = Config {
            database_url: "postgres://unused".to_string(),
            port: 0,
            environment: Environment::Development,
            hugging_face_api_key: api_key.map(str::to_string),
            inference_url: llm_endpoint.to_string(),
            llm_timeout: Duration::from_secs(5),
            rust_log: "debug".to_string(),
        };
        AppState {
            store: Arc::new(MemoryStore::default()),
            llm: LlmClient::new(
                config.hugging_face_api_key.clone(),
                config.inference_url.clone(),
                config.llm_timeout,
            )
            .unwrap(),
            config,
        }
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn aircraft_payload() -> Value {
        let mut seats = Vec::new();
        for row in 1..=8 {
            for (column, seat_type, side) in [
                ("A", "window", "left"),
                ("B", "middle", "left"),
                ("C", "aisle", "left"),
                ("D", "aisle", "right"),
                ("E", "middle", "right"),
                ("F", "window", "right"),
            ] {
                seats.push(json!({
                    "row": row.to_string(),
                    "column": column,
                    "seatNumber": format!("{row}{column}"),
                    "seatType": seat_type,
                    "side": side
                }));
            }
        }
        json!({
            "model": "Boeing 737",
            "airline": "Skyway",
            "totalRows": 8,
            "seatsPerRow": 6,
            "configuration": "3-3",
            "seats": seats
        })
    }

    fn flight_payload(aircraft_id: &str) -> Value {
        json!({
            "flightNumber": "SK202",
            "airline": "Skyway",
            "departure": {"city": "Denver", "airport": "DEN", "time": "2026-03-01T06:15:00Z"},
            "arrival": {"city": "Chicago", "airport": "ORD", "time": "2026-03-01T09:40:00Z"},
            "aircraftId": aircraft_id,
            "route": {"type": "domestic", "distance": 1430.0, "direction": "east"}
        })
    }

    async fn create_aircraft(app: &Router) -> String {
        let (status, body) =
            send(app, Method::POST, "/api/seats/aircraft", Some(aircraft_payload())).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let app = build_router(test_state("http://127.0.0.1:9", None));

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["environment"], "development");
    }

    #[tokio::test]
    async fn test_ai_recommendations_missing_preferences_is_400_without_model_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/").expect(0).create_async().await;
        let app = build_router(test_state(&server.url(), Some("test-key")));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ai/recommendations",
            Some(json!({"flightData": {}, "aircraftData": {"model": "A320"}})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Missing required data: flightData, aircraftData, or userPreferences"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ai_recommendations_malformed_json_is_400() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/ai/recommendations")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ai_recommendations_without_key_returns_fallback() {
        let app = build_router(test_state("http://127.0.0.1:9", None));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ai/recommendations",
            Some(json!({
                "flightData": {"departure": {"city": "Denver"}, "arrival": {"city": "Chicago"}},
                "aircraftData": aircraft_payload(),
                "userPreferences": {
                    "preference": "sunrise",
                    "flightDirection": "east",
                    "departureTime": "06:15"
                }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bestSeat"], "12A");
        let scores: Vec<u64> = body["recommendedSeats"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["score"].as_u64().unwrap())
            .collect();
        assert_eq!(scores, vec![90, 85, 80]);
    }

    #[tokio::test]
    async fn test_ai_recommendations_passes_model_result_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(
                json!([{
                    "generated_text": "Sure! {\"recommendedSeats\":[{\"seatNumber\":\"4F\",\"score\":92,\"reason\":\"sunset side\"}],\"bestSeat\":\"4F\",\"summary\":\"Right side wins.\"}"
                }])
                .to_string(),
            )
            .create_async()
            .await;
        let app = build_router(test_state(&server.url(), Some("test-key")));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ai/recommendations",
            Some(json!({
                "flightData": {},
                "aircraftData": aircraft_payload(),
                "userPreferences": {"preference": "sunset", "flightDirection": "west"},
                "customPrompt": "Near the front please"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "recommendedSeats": [{"seatNumber": "4F", "score": 92, "reason": "sunset side"}],
                "bestSeat": "4F",
                "summary": "Right side wins."
            })
        );
    }

    #[tokio::test]
    async fn test_ai_recommendations_oversized_prompt_is_413() {
        let app = build_router(test_state("http://127.0.0.1:9", Some("test-key")));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ai/recommendations",
            Some(json!({
                "flightData": {},
                "aircraftData": {"model": "A320"},
                "userPreferences": {"preference": "sunrise", "flightDirection": "east"},
                "customPrompt": "a".repeat(19_000)
            })),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PROMPT_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_aircraft_create_get_and_list() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let id = create_aircraft(&app).await;

        let (status, body) =
            send(&app, Method::GET, &format!("/api/seats/aircraft/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model"], "Boeing 737");
        assert_eq!(body["seats"].as_array().unwrap().len(), 48);
        assert_eq!(body["seats"][0]["isAvailable"], true);

        let (status, body) = send(&app, Method::GET, "/api/seats/aircraft", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_aircraft_unknown_id_is_404() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let (status, body) = send(
            &app,
            Method::GET,
            "/api/seats/aircraft/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Aircraft not found");
    }

    #[tokio::test]
    async fn test_aircraft_create_rejects_invalid_payload() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let mut payload = aircraft_payload();
        payload["totalRows"] = json!(0);

        let (status, _) = send(&app, Method::POST, "/api/seats/aircraft", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_seat_filter_endpoint() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let id = create_aircraft(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/seats/recommendations",
            Some(json!({
                "aircraftId": id,
                "preference": "sunset",
                "flightDirection": "west",
                "departureTime": "18:00"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["aircraft"], "Boeing 737");
        assert_eq!(body["preference"], "sunset");
        let numbers: Vec<&str> = body["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["seatNumber"].as_str().unwrap())
            .collect();
        assert_eq!(numbers, vec!["1F", "2F", "3F", "4F", "5F"]);
    }

    #[tokio::test]
    async fn test_seat_filter_unknown_aircraft_is_404() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/seats/recommendations",
            Some(json!({
                "aircraftId": "00000000-0000-0000-0000-000000000000",
                "preference": "sunrise"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_flight_create_get_and_route_lookup() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let aircraft_id = create_aircraft(&app).await;

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/flights",
            Some(flight_payload(&aircraft_id)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let flight_id = created["id"].as_str().unwrap().to_string();

        let (status, body) =
            send(&app, Method::GET, &format!("/api/flights/{flight_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["flightNumber"], "SK202");
        assert_eq!(body["route"]["direction"], "east");
        assert_eq!(body["aircraft"]["id"], aircraft_id.as_str());

        let (status, body) =
            send(&app, Method::GET, "/api/flights/route/Denver/Chicago", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) =
            send(&app, Method::GET, "/api/flights/route/Chicago/Denver", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());

        let (status, body) = send(&app, Method::GET, "/api/flights", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_flight_unknown_id_is_404() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let (status, body) = send(
            &app,
            Method::GET,
            "/api/flights/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Flight not found");
    }

    #[tokio::test]
    async fn test_flights_by_route_bad_city_uses_error_body() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let (status, body) =
            send(&app, Method::GET, "/api/flights/route/%FF/Chicago", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_flight_create_rejects_malformed_payload() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/flights",
            Some(json!({"flightNumber": "SK1"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_flight_create_rejects_unknown_aircraft() {
        let app = build_router(test_state("http://127.0.0.1:9", None));
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/flights",
            Some(flight_payload("00000000-0000-0000-0000-000000000000")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("does not exist"));
    }
}
