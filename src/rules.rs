//! Ordered gesture rule table.
//!
//! Rules are evaluated top to bottom and the first match wins. There is no
//! scoring across rules; reordering the table changes the classifier.

use crate::config::ClassifierConfig;
use crate::features::{Finger, HandFeatures};
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum Gesture {
    Pinky,
    Middle,
    #[strum(to_string = "Ring Pinky Middle")]
    RingPinkyMiddle,
    Pinch,
    Point,
    Peace,
    Rock,
    #[strum(to_string = "Thumbs Up")]
    ThumbsUp,
    Fist,
    #[strum(to_string = "Open Hand")]
    OpenHand,
    #[strum(to_string = "Four Fingers")]
    FourFingers,
    #[strum(to_string = "Three Fingers")]
    ThreeFingers,
    Unknown,
}

impl Gesture {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl Serialize for Gesture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Debug-only code naming the rule that produced a label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    Toilet,
    Angry,
    Awesome,
    Point,
    Peace,
    Rock,
    ThumbsUp,
    Fist,
    OpenHand,
    Four,
    Three,
    Unknown,
}

type Predicate = fn(&HandFeatures, &ClassifierConfig) -> bool;

pub struct Rule {
    pub gesture: Gesture,
    pub confidence: f64,
    /// Absent only for the pinch rule, which reports its distance instead.
    pub reason: Option<Reason>,
    pub reports_pinch_distance: bool,
    pub matches: Predicate,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("gesture", &self.gesture)
            .field("confidence", &self.confidence)
            .field("reason", &self.reason)
            .finish()
    }
}

const fn rule(gesture: Gesture, confidence: f64, reason: Reason, matches: Predicate) -> Rule {
    Rule {
        gesture,
        confidence,
        reason: Some(reason),
        reports_pinch_distance: false,
        matches,
    }
}

// --- PREDICATES ---

fn pinky_only(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.fingers.only(&[Finger::Pinky])
}

fn middle_only(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.fingers.only(&[Finger::Middle])
}

fn ring_pinky_middle(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.fingers.only(&[Finger::Middle, Finger::Ring, Finger::Pinky])
}

fn pinch(f: &HandFeatures, cfg: &ClassifierConfig) -> bool {
    f.pinch_points && f.pinch_distance < cfg.pinch_threshold
}

// The thumb is ignored from here on
fn point(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    let s = &f.fingers;
    s.index && !s.middle && !s.ring && !s.pinky
}

fn peace(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    let s = &f.fingers;
    s.index && s.middle && !s.ring && !s.pinky
}

fn rock(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    let s = &f.fingers;
    s.index && s.pinky && !s.middle && !s.ring
}

fn thumbs_up(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.fingers.thumb && f.extended_count == 1
}

fn fist(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.extended_count == 0
}

fn open_hand(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.extended_count == 5
}

fn four(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.extended_count == 4
}

fn three(f: &HandFeatures, _: &ClassifierConfig) -> bool {
    f.extended_count == 3
}

fn always(_: &HandFeatures, _: &ClassifierConfig) -> bool {
    true
}

// --- TABLE (ORDER MATTERS) ---

pub static RULES: [Rule; 12] = [
    rule(Gesture::Pinky, 0.88, Reason::Toilet, pinky_only),
    rule(Gesture::Middle, 0.88, Reason::Angry, middle_only),
    rule(Gesture::RingPinkyMiddle, 0.90, Reason::Awesome, ring_pinky_middle),
    Rule {
        gesture: Gesture::Pinch,
        confidence: 0.86,
        reason: None,
        reports_pinch_distance: true,
        matches: pinch,
    },
    rule(Gesture::Point, 0.87, Reason::Point, point),
    rule(Gesture::Peace, 0.88, Reason::Peace, peace),
    rule(Gesture::Rock, 0.88, Reason::Rock, rock),
    rule(Gesture::ThumbsUp, 0.90, Reason::ThumbsUp, thumbs_up),
    rule(Gesture::Fist, 0.85, Reason::Fist, fist),
    rule(Gesture::OpenHand, 0.92, Reason::OpenHand, open_hand),
    rule(Gesture::FourFingers, 0.82, Reason::Four, four),
    rule(Gesture::ThreeFingers, 0.80, Reason::Three, three),
];

/// Reached when nothing in `RULES` matches, e.g. two fingers that are not
/// point, peace or rock.
pub static FALLBACK: Rule = rule(Gesture::Unknown, 0.30, Reason::Unknown, always);

/// First matching rule, or `FALLBACK`.
pub fn evaluate(features: &HandFeatures, config: &ClassifierConfig) -> &'static Rule {
    RULES
        .iter()
        .find(|r| (r.matches)(features, config))
        .unwrap_or(&FALLBACK)
}

/// Every rule in evaluation order, fallback last.
pub fn table() -> impl Iterator<Item = &'static Rule> {
    RULES.iter().chain(std::iter::once(&FALLBACK))
}
