use crate::config::ClassifierConfig;
use crate::features::{self, FingerState, HandFeatures};
use crate::landmark::{frame_from_value, Landmark, Role};
use crate::resolver::RoleResolver;
use crate::rules::{self, Gesture, Reason};
use serde::Serialize;
use serde_json::{Map, Value};
use strum_macros::{Display, IntoStaticStr};
use tracing::debug;

/// Machine-readable failure codes carried in the debug payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotEnoughLandmarks,
    NoWrist,
}

/// Diagnostic payload. Serializes as one flat object: the five finger flags
/// merged with `error`, `reason` or `pinch_distance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugInfo {
    #[serde(flatten)]
    pub fingers: Option<FingerState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinch_distance: Option<f64>,
}

impl DebugInfo {
    fn error(code: ErrorCode) -> Self {
        Self {
            error: Some(code),
            ..Default::default()
        }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: Gesture,
    pub confidence: f64,
    pub debug: DebugInfo,
}

impl Classification {
    fn rejected(confidence: f64, code: ErrorCode) -> Self {
        Self {
            label: Gesture::Unknown,
            confidence,
            debug: DebugInfo::error(code),
        }
    }

    /// Plain `(label, confidence, debug)` view.
    pub fn into_tuple(self) -> (String, f64, Map<String, Value>) {
        let map = self.debug.to_map();
        (self.label.to_string(), self.confidence, map)
    }
}

/// Stateless hand-sign classifier. Cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies a raw JSON value. Anything but an array is rejected as too short.
    pub fn classify_value(&self, value: &Value) -> Classification {
        match frame_from_value(value) {
            Some(frame) => self.classify(&frame),
            None => {
                debug!("landmarks value is not an array");
                Classification::rejected(0.2, ErrorCode::NotEnoughLandmarks)
            }
        }
    }

    pub fn classify(&self, frame: &[Option<Landmark>]) -> Classification {
        if frame.len() < self.config.min_landmarks {
            debug!(
                "rejecting frame: {} landmarks, need {}",
                frame.len(),
                self.config.min_landmarks
            );
            return Classification::rejected(0.2, ErrorCode::NotEnoughLandmarks);
        }

        let resolver = RoleResolver::new(frame);
        let Some(wrist) = resolver.resolve(Role::Wrist) else {
            debug!("rejecting frame: wrist unresolved");
            return Classification::rejected(0.1, ErrorCode::NoWrist);
        };

        let features = features::extract(&resolver, wrist, self.config.extension_margin);
        self.apply_rules(&features)
    }

    /// Runs the rule table over an already extracted feature vector.
    pub fn apply_rules(&self, features: &HandFeatures) -> Classification {
        let rule = rules::evaluate(features, &self.config);

        debug!(
            gesture = %rule.gesture,
            extended = features.extended_count,
            pinch = features.pinch_distance,
            "rule matched"
        );

        Classification {
            label: rule.gesture,
            confidence: rule.confidence,
            debug: DebugInfo {
                fingers: Some(features.fingers),
                error: None,
                reason: rule.reason,
                pinch_distance: rule
                    .reports_pinch_distance
                    .then_some(features.pinch_distance),
            },
        }
    }
}

/// Classifies with the default tunables.
pub fn classify(frame: &[Option<Landmark>]) -> Classification {
    Classifier::default().classify(frame)
}
