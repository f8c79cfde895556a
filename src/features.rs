use crate::geometry::planar_distance;
use crate::landmark::{Landmark, Role};
use crate::resolver::RoleResolver;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// (tip, pip) roles. The thumb has no pip, its ip joint stands in.
    pub fn joints(&self) -> (Role, Role) {
        match self {
            Self::Thumb => (Role::ThumbTip, Role::ThumbIp),
            Self::Index => (Role::IndexTip, Role::IndexPip),
            Self::Middle => (Role::MiddleTip, Role::MiddlePip),
            Self::Ring => (Role::RingTip, Role::RingPip),
            Self::Pinky => (Role::PinkyTip, Role::PinkyPip),
        }
    }
}

/// Per-frame extension flags. Field names double as the debug payload keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    pub fn get(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn set(&mut self, finger: Finger, extended: bool) {
        match finger {
            Finger::Thumb => self.thumb = extended,
            Finger::Index => self.index = extended,
            Finger::Middle => self.middle = extended,
            Finger::Ring => self.ring = extended,
            Finger::Pinky => self.pinky = extended,
        }
    }

    pub fn count(&self) -> usize {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&e| e)
            .count()
    }

    /// True when exactly the listed fingers are extended and every other one is not.
    pub fn only(&self, fingers: &[Finger]) -> bool {
        Finger::iter().all(|f| self.get(f) == fingers.contains(&f))
    }
}

/// Everything the rule table looks at, derived once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandFeatures {
    pub fingers: FingerState,
    pub extended_count: usize,
    /// Thumb tip to index tip; 0.0 when either is missing.
    pub pinch_distance: f64,
    /// Both thumb tip and index tip resolved.
    pub pinch_points: bool,
}

impl HandFeatures {
    pub fn from_fingers(fingers: FingerState) -> Self {
        Self {
            fingers,
            extended_count: fingers.count(),
            ..Default::default()
        }
    }

    pub fn with_pinch(mut self, distance: f64) -> Self {
        self.pinch_distance = distance;
        self.pinch_points = true;
        self
    }
}

/// Strict comparison: a tip exactly `margin` beyond its pip is not extended.
pub fn is_extended(
    tip: Option<&Landmark>,
    pip: Option<&Landmark>,
    wrist: &Landmark,
    margin: f64,
) -> bool {
    match (tip, pip) {
        (Some(tip), Some(pip)) => {
            planar_distance(Some(tip), Some(wrist))
                > planar_distance(Some(pip), Some(wrist)) + margin
        }
        _ => false,
    }
}

pub fn extract(resolver: &RoleResolver<'_>, wrist: &Landmark, margin: f64) -> HandFeatures {
    let mut fingers = FingerState::default();
    for finger in Finger::iter() {
        let (tip, pip) = finger.joints();
        fingers.set(
            finger,
            is_extended(resolver.resolve(tip), resolver.resolve(pip), wrist, margin),
        );
    }

    let thumb_tip = resolver.resolve(Role::ThumbTip);
    let index_tip = resolver.resolve(Role::IndexTip);

    HandFeatures {
        fingers,
        extended_count: fingers.count(),
        pinch_distance: planar_distance(thumb_tip, index_tip),
        pinch_points: thumb_tip.is_some() && index_tip.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXTENSION_MARGIN;

    #[test]
    fn test_margin_boundary_is_strict() {
        let wrist = Landmark::new(0.0, 0.0);
        let pip = Landmark::new(0.0, 0.5);
        let at_margin = Landmark::new(0.0, 0.5 + DEFAULT_EXTENSION_MARGIN);
        let past_margin = Landmark::new(0.0, 0.5 + DEFAULT_EXTENSION_MARGIN + 1e-9);

        assert!(!is_extended(Some(&at_margin), Some(&pip), &wrist, DEFAULT_EXTENSION_MARGIN));
        assert!(is_extended(Some(&past_margin), Some(&pip), &wrist, DEFAULT_EXTENSION_MARGIN));
    }

    #[test]
    fn test_missing_joint_fails_closed() {
        let wrist = Landmark::new(0.0, 0.0);
        let far = Landmark::new(0.0, 0.9);
        assert!(!is_extended(Some(&far), None, &wrist, DEFAULT_EXTENSION_MARGIN));
        assert!(!is_extended(None, Some(&far), &wrist, DEFAULT_EXTENSION_MARGIN));
    }

    #[test]
    fn test_only() {
        let state = FingerState {
            index: true,
            middle: true,
            ..Default::default()
        };
        assert!(state.only(&[Finger::Index, Finger::Middle]));
        assert!(!state.only(&[Finger::Index]));
        assert_eq!(state.count(), 2);
    }
}
