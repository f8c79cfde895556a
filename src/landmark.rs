use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One tracked point. Coordinates are normalized, conventionally to [0, 1].
/// Missing coordinates read as 0.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Keys the classifier does not read (visibility, presence, unusable names).
    /// They still make the record present.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn named(name: &str, x: f64, y: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::new(x, y)
        }
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    pub fn x(&self) -> f64 {
        self.x.unwrap_or(0.0)
    }

    pub fn y(&self) -> f64 {
        self.y.unwrap_or(0.0)
    }

    /// A record carrying no keys at all is treated the same as a missing one.
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.z.is_none()
            && self.name.is_none()
            && self.extra.is_empty()
    }

    /// Lenient decoding of one raw entry. `null`, non-objects and `{}` decode
    /// to `None`; any other object is present, whatever its keys.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        if obj.is_empty() {
            return None;
        }

        let mut lm = Self::default();
        for (key, v) in obj {
            match (key.as_str(), v) {
                ("x", _) => lm.x = Some(coerce_f64(v)),
                ("y", _) => lm.y = Some(coerce_f64(v)),
                ("z", _) => lm.z = Some(coerce_f64(v)),
                // Only non-empty string names take part in role lookup
                ("name", Value::String(name)) if !name.is_empty() => {
                    lm.name = Some(name.clone());
                }
                _ => {
                    lm.extra.insert(key.clone(), v.clone());
                }
            }
        }
        Some(lm)
    }
}

/// Numeric coercion that never fails: numbers pass through, booleans map to
/// 1.0/0.0, numeric strings are parsed, everything else is 0.0.
fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Decodes a raw landmark array. Returns `None` when the value is not an
/// array; absent entries keep their slot as `None`.
pub fn frame_from_value(value: &Value) -> Option<Vec<Option<Landmark>>> {
    let items = value.as_array()?;
    Some(items.iter().map(Landmark::from_value).collect())
}

// ============================================================================
// ROLES
// ============================================================================

/// The semantic landmark positions the classifier reads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Wrist,
    ThumbIp,
    ThumbTip,
    #[strum(to_string = "index_finger_pip")]
    IndexPip,
    #[strum(to_string = "index_finger_tip")]
    IndexTip,
    #[strum(to_string = "middle_finger_pip")]
    MiddlePip,
    #[strum(to_string = "middle_finger_tip")]
    MiddleTip,
    #[strum(to_string = "ring_finger_pip")]
    RingPip,
    #[strum(to_string = "ring_finger_tip")]
    RingTip,
    #[strum(to_string = "pinky_finger_pip")]
    PinkyPip,
    #[strum(to_string = "pinky_finger_tip")]
    PinkyTip,
}

impl Role {
    /// Canonical name carried in a landmark's `name` field.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Position in the standard 21-point layout.
    pub fn fallback_index(&self) -> usize {
        match self {
            Self::Wrist => WRIST,
            Self::ThumbIp => THUMB_IP,
            Self::ThumbTip => THUMB_TIP,
            Self::IndexPip => INDEX_PIP,
            Self::IndexTip => INDEX_TIP,
            Self::MiddlePip => MIDDLE_PIP,
            Self::MiddleTip => MIDDLE_TIP,
            Self::RingPip => RING_PIP,
            Self::RingTip => RING_TIP,
            Self::PinkyPip => PINKY_PIP,
            Self::PinkyTip => PINKY_TIP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_role_names_round_trip() {
        for role in Role::iter() {
            assert_eq!(Role::from_str(role.name()).unwrap(), role);
        }
        assert_eq!(Role::IndexTip.name(), "index_finger_tip");
        assert_eq!(Role::ThumbIp.name(), "thumb_ip");
    }

    #[test]
    fn test_coercion() {
        let lm = Landmark::from_value(&json!({"x": "0.25", "y": true, "z": null})).unwrap();
        assert_eq!(lm.x(), 0.25);
        assert_eq!(lm.y(), 1.0);
        assert_eq!(lm.z, Some(0.0));

        let lm = Landmark::from_value(&json!({"x": "abc", "name": ""})).unwrap();
        assert_eq!(lm.x(), 0.0);
        assert_eq!(lm.y(), 0.0);
        assert_eq!(lm.name, None);
    }

    #[test]
    fn test_absent_entries() {
        assert_eq!(Landmark::from_value(&json!(null)), None);
        assert_eq!(Landmark::from_value(&json!({})), None);
        assert_eq!(Landmark::from_value(&json!(3)), None);
    }

    #[test]
    fn test_unread_keys_keep_record_present() {
        for raw in [json!({"visibility": 0.9}), json!({"name": ""}), json!({"name": 5})] {
            let lm = Landmark::from_value(&raw).expect("non-empty object is present");
            assert!(!lm.is_empty());
            assert_eq!(lm.name, None);
            assert_eq!((lm.x(), lm.y()), (0.0, 0.0));
        }
    }

    #[test]
    fn test_frame_from_value() {
        assert!(frame_from_value(&json!({"x": 1})).is_none());
        let frame = frame_from_value(&json!([{"x": 0.1, "y": 0.2}, null])).unwrap();
        assert_eq!(frame.len(), 2);
        assert!(frame[0].is_some());
        assert!(frame[1].is_none());
    }
}
