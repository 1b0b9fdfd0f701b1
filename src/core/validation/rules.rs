//! Validation rules per operation kind
//!
//! Shared field-rule helpers composed per operation in declared order:
//! body presence, required fields, type, range/length, language membership,
//! nested-object shape.

use super::{MAX_AUDIO_SIZE_BYTES, MAX_TEXT_LENGTH, SUPPORTED_LANGUAGES, ValidationError};
use serde_json::{Map, Value};

type ValidationResult = Result<(), ValidationError>;

/// Validate a text-to-speech request (`text`, optional `voiceId`, `language`).
pub fn validate_tts_request(body: &Value) -> ValidationResult {
    let obj = body_object(body)?;

    let text = match obj.get("text") {
        None | Some(Value::Null) => return Err(required("text")),
        Some(Value::String(s)) if s.is_empty() => return Err(required("text")),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(ValidationError::bad_request(
                "Field 'text' must be a string",
            ));
        }
    };

    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::bad_request(format!(
            "Text exceeds maximum length of {} characters",
            MAX_TEXT_LENGTH
        )));
    }

    if text.trim().is_empty() {
        return Err(ValidationError::bad_request(
            "Field 'text' cannot be empty or whitespace only",
        ));
    }

    check_language(obj)
}

/// Validate a speech-to-text request (`audio` base64, optional `language`,
/// optional `coverage` summary).
pub fn validate_stt_request(body: &Value) -> ValidationResult {
    let obj = body_object(body)?;

    let audio = match obj.get("audio") {
        None | Some(Value::Null) => return Err(required("audio")),
        Some(Value::String(s)) if s.is_empty() => return Err(required("audio")),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(ValidationError::bad_request(
                "Field 'audio' must be a base64 encoded string",
            ));
        }
    };

    // Base64 carries ~4/3 of the decoded payload
    let estimated_size = audio.len() * 3 / 4;
    if estimated_size > MAX_AUDIO_SIZE_BYTES {
        return Err(ValidationError::bad_request(format!(
            "Audio exceeds maximum size of {}MB",
            MAX_AUDIO_SIZE_BYTES / (1024 * 1024)
        )));
    }

    check_language(obj)?;
    check_coverage(obj)
}

/// Validate a coaching-tip request (`score`, optional `weakPoints`,
/// `strongPoints`, `language`).
pub fn validate_coaching_request(body: &Value) -> ValidationResult {
    let obj = body_object(body)?;

    let score = match obj.get("score") {
        None | Some(Value::Null) => return Err(required("score")),
        Some(value) => value,
    };

    let score = score.as_f64().ok_or_else(|| {
        ValidationError::bad_request("Field 'score' must be a number")
    })?;

    if !(0.0..=100.0).contains(&score) {
        return Err(ValidationError::bad_request(
            "Field 'score' must be between 0 and 100",
        ));
    }

    for field in ["weakPoints", "strongPoints"] {
        match obj.get(field) {
            None | Some(Value::Null) | Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(ValidationError::bad_request(format!(
                    "Field '{}' must be an array",
                    field
                )));
            }
        }
    }

    check_language(obj)
}

/// Validate a performance-review request (`songTitle`, `songArtist`,
/// `finalScore`, optional `language`).
pub fn validate_review_request(body: &Value) -> ValidationResult {
    let obj = body_object(body)?;

    for field in ["songTitle", "songArtist", "finalScore"] {
        if !obj.contains_key(field) {
            return Err(required(field));
        }
    }

    let final_score = obj
        .get("finalScore")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            ValidationError::bad_request("Field 'finalScore' must be a number")
        })?;

    if !(0.0..=100.0).contains(&final_score) {
        return Err(ValidationError::bad_request(
            "Field 'finalScore' must be between 0 and 100",
        ));
    }

    check_language(obj)
}

/// Reject missing, null, or non-object bodies and empty objects.
fn body_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    match body.as_object() {
        Some(map) if !map.is_empty() => Ok(map),
        _ => Err(ValidationError::bad_request("Request body is required")),
    }
}

fn required(field: &str) -> ValidationError {
    ValidationError::bad_request(format!("Field '{}' is required", field))
}

/// Optional `language` field: absent, null, or empty string is skipped;
/// anything else must be a supported code.
fn check_language(obj: &Map<String, Value>) -> ValidationResult {
    let value = match obj.get("language") {
        None | Some(Value::Null) => return Ok(()),
        Some(value) => value,
    };

    match value.as_str() {
        Some("") => Ok(()),
        Some(code) if SUPPORTED_LANGUAGES.contains(&code) => Ok(()),
        Some(code) => Err(unsupported_language(code)),
        None => Err(unsupported_language(&value.to_string())),
    }
}

fn unsupported_language(code: &str) -> ValidationError {
    ValidationError::bad_request(format!(
        "Unsupported language '{}'. Supported: {}",
        code,
        SUPPORTED_LANGUAGES.join(", ")
    ))
}

/// Optional `coverage` object: `skipFraction` in [0,1], joint counters as
/// non-negative integers, `topSkippedJoints` (if present) an array.
fn check_coverage(obj: &Map<String, Value>) -> ValidationResult {
    let value = match obj.get("coverage") {
        None | Some(Value::Null) => return Ok(()),
        Some(value) => value,
    };

    let coverage = value.as_object().ok_or_else(|| {
        ValidationError::bad_request("Field 'coverage' must be an object")
    })?;

    let fraction_in_range = coverage
        .get("skipFraction")
        .and_then(Value::as_f64)
        .map(|fraction| (0.0..=1.0).contains(&fraction))
        .unwrap_or(false);
    if !fraction_in_range {
        return Err(ValidationError::bad_request(
            "Field 'coverage.skipFraction' must be between 0 and 1",
        ));
    }

    for field in ["attemptedJoints", "skippedJoints"] {
        if coverage.get(field).and_then(Value::as_u64).is_none() {
            return Err(ValidationError::bad_request(format!(
                "Field 'coverage.{}' must be a non-negative integer",
                field
            )));
        }
    }

    match coverage.get("topSkippedJoints") {
        None | Some(Value::Null) | Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(ValidationError::bad_request(
            "Field 'coverage.topSkippedJoints' must be an array",
        )),
    }
}
