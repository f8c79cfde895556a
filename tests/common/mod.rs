#![allow(dead_code)] // Not every test file uses every helper

use serde_json::{json, Value};
use signsense::landmark::{Landmark, Role};
use signsense::Classifier;

pub const WRIST_POS: (f64, f64) = (0.5, 0.9);
const PIP_Y: f64 = 0.7;
const EXTENDED_TIP_Y: f64 = 0.5;
const CURLED_TIP_Y: f64 = 0.75;

/// Builds synthetic 21-point frames. Fingers are spread across x so no two tips
/// end up within pinch range unless a test puts them there.
#[derive(Clone)]
pub struct FrameBuilder {
    points: Vec<Option<Landmark>>,
    named: bool,
}

fn column(role: Role) -> f64 {
    match role {
        Role::Wrist => WRIST_POS.0,
        Role::ThumbIp | Role::ThumbTip => 0.3,
        Role::IndexPip | Role::IndexTip => 0.4,
        Role::MiddlePip | Role::MiddleTip => 0.5,
        Role::RingPip | Role::RingTip => 0.6,
        Role::PinkyPip | Role::PinkyTip => 0.7,
    }
}

impl FrameBuilder {
    /// Every finger curled.
    pub fn fist() -> Self {
        let mut points = vec![Some(Landmark::new(0.5, 0.8)); 21];
        points[Role::Wrist.fallback_index()] = Some(Landmark::new(WRIST_POS.0, WRIST_POS.1));
        for pip in [
            Role::ThumbIp,
            Role::IndexPip,
            Role::MiddlePip,
            Role::RingPip,
            Role::PinkyPip,
        ] {
            points[pip.fallback_index()] = Some(Landmark::new(column(pip), PIP_Y));
        }
        let mut builder = Self {
            points,
            named: false,
        };
        for tip in [
            Role::ThumbTip,
            Role::IndexTip,
            Role::MiddleTip,
            Role::RingTip,
            Role::PinkyTip,
        ] {
            builder = builder.tip(tip, false);
        }
        builder
    }

    /// Extension pattern in thumb, index, middle, ring, pinky order.
    pub fn pattern(extended: [bool; 5]) -> Self {
        let tips = [
            Role::ThumbTip,
            Role::IndexTip,
            Role::MiddleTip,
            Role::RingTip,
            Role::PinkyTip,
        ];
        tips.iter()
            .zip(extended)
            .fold(Self::fist(), |b, (&tip, ext)| b.tip(tip, ext))
    }

    pub fn tip(self, role: Role, extended: bool) -> Self {
        let y = if extended { EXTENDED_TIP_Y } else { CURLED_TIP_Y };
        self.at(role, column(role), y)
    }

    pub fn at(mut self, role: Role, x: f64, y: f64) -> Self {
        self.points[role.fallback_index()] = Some(Landmark::new(x, y));
        self
    }

    pub fn remove(mut self, role: Role) -> Self {
        self.points[role.fallback_index()] = None;
        self
    }

    pub fn position(&self, role: Role) -> (f64, f64) {
        let lm = self.points[role.fallback_index()]
            .as_ref()
            .expect("role is present");
        (lm.x(), lm.y())
    }

    /// Attach canonical names to the ten roles plus the wrist.
    pub fn named(mut self) -> Self {
        use strum::IntoEnumIterator;
        for role in Role::iter() {
            if let Some(lm) = self.points[role.fallback_index()].as_mut() {
                lm.name = Some(role.name().to_string());
            }
        }
        self.named = true;
        self
    }

    pub fn reversed(mut self) -> Self {
        assert!(self.named, "reordering only makes sense for named frames");
        self.points.reverse();
        self
    }

    pub fn build(self) -> Vec<Option<Landmark>> {
        self.points
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.points
                .iter()
                .map(|p| match p {
                    Some(lm) => serde_json::to_value(lm).unwrap(),
                    None => Value::Null,
                })
                .collect(),
        )
    }

    pub fn request(&self) -> Value {
        json!({ "landmarks": self.to_json() })
    }
}

pub fn classifier() -> Classifier {
    Classifier::default()
}
