use crate::landmark::Landmark;

/// Euclidean distance over `x`/`y` only; `z` is ignored.
///
/// Either point missing yields 0.0 instead of an error, so anything derived from
/// the distance degrades to "not extended" rather than failing.
pub fn planar_distance(a: Option<&Landmark>, b: Option<&Landmark>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => (a.x() - b.x()).hypot(a.y() - b.y()),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        let a = Landmark::new(0.0, 0.0);
        let b = Landmark::new(0.3, 0.4);
        assert!((planar_distance(Some(&a), Some(&b)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_depth_is_ignored() {
        let a = Landmark::new(0.1, 0.1).with_z(-5.0);
        let b = Landmark::new(0.1, 0.1).with_z(5.0);
        assert_eq!(planar_distance(Some(&a), Some(&b)), 0.0);
    }

    #[test]
    fn test_missing_point_is_zero() {
        let a = Landmark::new(0.9, 0.9);
        assert_eq!(planar_distance(None, Some(&a)), 0.0);
        assert_eq!(planar_distance(Some(&a), None), 0.0);
        assert_eq!(planar_distance(None, None), 0.0);
    }

    #[test]
    fn test_missing_coordinates_default_to_origin() {
        let partial = Landmark {
            x: Some(0.6),
            ..Default::default()
        };
        let origin = Landmark::new(0.0, 0.0);
        assert!((planar_distance(Some(&partial), Some(&origin)) - 0.6).abs() < 1e-12);
    }
}
