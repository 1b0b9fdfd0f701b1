//! Gemini proxy endpoints for coaching intelligence
//!
//! Generates coaching tips and performance reviews without exposing the
//! generative upstream's credentials. Generation failures fall back to
//! canned language-specific copy rather than surfacing an error.

use crate::core::validation::{validate_coaching_request, validate_review_request};
use crate::providers::gemini::{
    CoverageSummary, MAX_COACHING_TIP_WORDS, MAX_PERFORMANCE_REVIEW_WORDS, ReviewContext,
    build_coaching_prompt, build_improvement_tip, build_review_prompt, fallback_review,
    fallback_tip,
};
use crate::server::routes::admit;
use crate::server::state::AppState;
use crate::server::utils::client_ip;
use crate::utils::error::GatewayError;
use crate::utils::text::truncate_to_word_limit;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info, warn};

/// Configure Gemini proxy routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/gemini")
            .route("/coaching-tip", web::post().to(coaching_tip))
            .route("/performance-review", web::post().to(performance_review))
            .route("/health", web::get().to(health_check)),
    );
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CoachingTipResponse {
    tip: String,
    target_body_part: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewResponse {
    review: String,
    improvement_tip: String,
}

/// Generate a coaching tip from pose analysis.
async fn coaching_tip(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let client_id = client_ip(&req);
    admit(&state, &client_id).await?;

    validate_coaching_request(&body).map_err(|e| {
        warn!("Invalid coaching request from {}: {}", client_id, e);
        GatewayError::from(e)
    })?;

    let score = body.get("score").and_then(Value::as_f64).unwrap_or_default();
    let weak_points = string_items(body.get("weakPoints"));
    let strong_points = string_items(body.get("strongPoints"));
    let language = optional_str(&body, "language").unwrap_or("en");

    info!(
        "Coaching tip request: score={}, weak={:?}, lang={}",
        score, weak_points, language
    );

    let target_body_part = weak_points
        .first()
        .cloned()
        .unwrap_or_else(|| "overall".to_string());

    let prompt =
        build_coaching_prompt(score, &weak_points, &strong_points, &target_body_part, language);

    let tip = match state.gemini.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Gemini API error: {}", e);
            fallback_tip(language, score).to_string()
        }
    };

    Ok(HttpResponse::Ok().json(CoachingTipResponse {
        tip: truncate_to_word_limit(&tip, MAX_COACHING_TIP_WORDS),
        target_body_part,
    }))
}

/// Generate a performance review after a dance session.
async fn performance_review(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let client_id = client_ip(&req);
    admit(&state, &client_id).await?;

    validate_review_request(&body).map_err(|e| {
        warn!("Invalid review request from {}: {}", client_id, e);
        GatewayError::from(e)
    })?;

    let song_title = body.get("songTitle").and_then(Value::as_str).unwrap_or_default();
    let song_artist = body.get("songArtist").and_then(Value::as_str).unwrap_or_default();
    let final_score = body
        .get("finalScore")
        .and_then(Value::as_f64)
        .unwrap_or_default();
    let previous_best = body.get("previousBest").and_then(Value::as_f64);
    let strongest_part = optional_str(&body, "strongestPart").unwrap_or("overall movement");
    let weakest_part = optional_str(&body, "weakestPart").unwrap_or("timing");
    let language = optional_str(&body, "language").unwrap_or("en");
    let coverage: Option<CoverageSummary> = body
        .get("coverage")
        .filter(|value| !value.is_null())
        .and_then(|value| serde_json::from_value(value.clone()).ok());

    info!(
        "Performance review request: {}, score={}, lang={}",
        song_title, final_score, language
    );

    let context = ReviewContext {
        song_title,
        song_artist,
        final_score,
        previous_best,
        strongest_part,
        weakest_part,
        language,
        coverage: coverage.as_ref(),
    };
    let prompt = build_review_prompt(&context);

    let review = match state.gemini.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Gemini API error: {}", e);
            fallback_review(language, final_score, song_title)
        }
    };

    Ok(HttpResponse::Ok().json(ReviewResponse {
        review: truncate_to_word_limit(&review, MAX_PERFORMANCE_REVIEW_WORDS),
        improvement_tip: build_improvement_tip(coverage.as_ref(), weakest_part),
    }))
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "gemini-proxy",
    }))
}

/// Optional string field, treating null and empty string as absent.
fn optional_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// String entries of an optional array field; non-string entries are dropped.
fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
