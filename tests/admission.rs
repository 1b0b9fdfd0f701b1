//! End-to-end admission-control tests for the HTTP surface
//!
//! Exercises the resolve-client → rate-limit → validate flow through real
//! route handlers, without touching any upstream.

use actix_web::{App, test, web};
use serde_json::{Value, json};
use voicecoach_gateway::config::Config;
use voicecoach_gateway::server::routes;
use voicecoach_gateway::server::state::AppState;

fn test_state(limit: u32) -> web::Data<AppState> {
    let mut config = Config::default();
    config.rate_limit.requests_per_window = limit;
    web::Data::new(AppState::new(config).unwrap())
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state)
                .configure(routes::health::configure_routes)
                .configure(routes::speech::configure_routes)
                .configure(routes::coaching::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn health_endpoints_respond() {
    let app = test_app!(test_state(100));

    for uri in ["/health", "/elevenlabs/health", "/gemini/health"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "{} should be healthy", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }
}

#[actix_web::test]
async fn tts_empty_body_is_bad_request() {
    let app = test_app!(test_state(100));

    let req = test::TestRequest::post()
        .uri("/elevenlabs/tts")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "bad_request");
    assert_eq!(body["error"]["message"], "Request body is required");
}

#[actix_web::test]
async fn tts_unsupported_language_lists_supported_set() {
    let app = test_app!(test_state(100));

    let req = test::TestRequest::post()
        .uri("/elevenlabs/tts")
        .set_json(json!({"text": "hi", "language": "fr"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "Unsupported language 'fr'. Supported: en, es, de, ru"
    );
}

#[actix_web::test]
async fn review_out_of_range_score_names_the_range() {
    let app = test_app!(test_state(100));

    let req = test::TestRequest::post()
        .uri("/gemini/performance-review")
        .set_json(json!({"songTitle": "A", "songArtist": "B", "finalScore": 101}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "bad_request");
    assert_eq!(
        body["error"]["message"],
        "Field 'finalScore' must be between 0 and 100"
    );
}

#[actix_web::test]
async fn coaching_missing_score_names_the_field() {
    let app = test_app!(test_state(100));

    let req = test::TestRequest::post()
        .uri("/gemini/coaching-tip")
        .set_json(json!({"weakPoints": ["arms"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Field 'score' is required");
}

#[actix_web::test]
async fn rate_limit_rejects_with_retry_after() {
    // Limit 2; invalid bodies still consume admission since the limiter runs
    // before validation.
    let app = test_app!(test_state(2));

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/gemini/coaching-tip")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    let req = test::TestRequest::post()
        .uri("/gemini/coaching-tip")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 429);
    let retry_after: u64 = resp
        .headers()
        .get("Retry-After")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(retry_after >= 1);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "rate_limited");
    assert_eq!(body["error"]["message"], "Too many requests");
    assert!(body["error"]["retry_after"].as_u64().unwrap() >= 1);
}

#[actix_web::test]
async fn rate_limit_keys_on_forwarded_address() {
    let app = test_app!(test_state(1));

    // exhaust client A
    let req = test::TestRequest::post()
        .uri("/elevenlabs/tts")
        .insert_header(("X-Forwarded-For", "203.0.113.1"))
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);

    let req = test::TestRequest::post()
        .uri("/elevenlabs/tts")
        .insert_header(("X-Forwarded-For", "203.0.113.1"))
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 429);

    // client B is unaffected
    let req = test::TestRequest::post()
        .uri("/elevenlabs/tts")
        .insert_header(("X-Forwarded-For", "203.0.113.2"))
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);
}

#[actix_web::test]
async fn limiter_reset_is_reachable_from_state() {
    let state = test_state(1);
    let app = test_app!(state.clone());

    let req = test::TestRequest::post()
        .uri("/elevenlabs/stt")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);

    let req = test::TestRequest::post()
        .uri("/elevenlabs/stt")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 429);

    // administrative reset clears the client's history
    state.rate_limiter.reset("unknown").await;

    let req = test::TestRequest::post()
        .uri("/elevenlabs/stt")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);
}

#[actix_web::test]
async fn voices_endpoint_lists_catalog() {
    let app = test_app!(test_state(100));

    let req = test::TestRequest::get()
        .uri("/elevenlabs/voices")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["en"]["model"], "eleven_turbo_v2");
    assert!(
        body["en"]["available"]
            .as_array()
            .unwrap()
            .contains(&json!("Rachel"))
    );

    let req = test::TestRequest::get()
        .uri("/elevenlabs/voices?language=es")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["es"]["default"], "XrExE9yKIg1WjnnlVkGX");

    let req = test::TestRequest::get()
        .uri("/elevenlabs/voices?language=xx")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}
