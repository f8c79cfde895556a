use crate::classifier::{Classifier, DebugInfo};
use crate::rules::Gesture;
use serde::Serialize;
use serde_json::Value;
use strum_macros::Display;
use tracing::debug;

pub const NO_LANDMARKS_MESSAGE: &str = "No landmarks provided.";

/// Failures the transport reports without consulting the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvelopeError {
    NoLandmarks,
}

/// Response envelope for `/api/handsign`. Both shapes go out with the same status.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum HandsignResponse {
    Success {
        success: bool,
        sign: Gesture,
        confidence: f64,
        debug: DebugInfo,
    },
    Failure {
        success: bool,
        error: EnvelopeError,
        message: String,
    },
}

impl HandsignResponse {
    pub fn no_landmarks() -> Self {
        Self::Failure {
            success: false,
            error: EnvelopeError::NoLandmarks,
            message: NO_LANDMARKS_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Service: classify a decoded request body.
///
/// The classifier is only consulted when `landmarks` is a non-empty array;
/// every other body (missing field, wrong type, not an object) short-circuits
/// to `NO_LANDMARKS`.
pub fn handle_request(classifier: &Classifier, body: &Value) -> HandsignResponse {
    let landmarks = match body.get("landmarks") {
        Some(v @ Value::Array(items)) if !items.is_empty() => v,
        _ => {
            debug!("request without usable landmarks");
            return HandsignResponse::no_landmarks();
        }
    };

    let result = classifier.classify_value(landmarks);
    HandsignResponse::Success {
        success: true,
        sign: result.label,
        confidence: result.confidence,
        debug: result.debug,
    }
}

/// JSON media types: `application/json` and `application/*+json`, parameters ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.split_once('/') {
        Some(("application", "json")) => true,
        Some(("application", sub)) => sub.ends_with("+json"),
        _ => false,
    }
}

/// Lenient body decoding: unparsable input reads as an empty object.
pub fn parse_body(raw: &[u8]) -> Value {
    serde_json::from_slice(raw).unwrap_or_else(|_| Value::Object(Default::default()))
}
