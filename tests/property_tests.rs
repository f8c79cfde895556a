use proptest::prelude::*;
use signsense::geometry::planar_distance;
use signsense::landmark::Landmark;
use signsense::{Classifier, Gesture};

// --- STRATEGIES ---

prop_compose! {
    fn arb_landmark()(
        x in -2.0..2.0f64,
        y in -2.0..2.0f64,
        z in proptest::option::of(-1.0..1.0f64),
    ) -> Landmark {
        Landmark { x: Some(x), y: Some(y), z, ..Default::default() }
    }
}

prop_compose! {
    fn arb_frame()(
        points in proptest::collection::vec(proptest::option::weighted(0.9, arb_landmark()), 0..30)
    ) -> Vec<Option<Landmark>> {
        points
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_distance_is_symmetric(a in arb_landmark(), b in arb_landmark()) {
        prop_assert_eq!(
            planar_distance(Some(&a), Some(&b)),
            planar_distance(Some(&b), Some(&a))
        );
    }

    #[test]
    fn test_distance_missing_point_is_zero(a in arb_landmark()) {
        prop_assert_eq!(planar_distance(None, Some(&a)), 0.0);
        prop_assert_eq!(planar_distance(Some(&a), None), 0.0);
    }

    #[test]
    fn test_distance_is_non_negative(a in arb_landmark(), b in arb_landmark()) {
        prop_assert!(planar_distance(Some(&a), Some(&b)) >= 0.0);
    }

    #[test]
    fn test_classification_is_deterministic(frame in arb_frame()) {
        let classifier = Classifier::default();
        prop_assert_eq!(classifier.classify(&frame), classifier.classify(&frame));
    }

    #[test]
    fn test_classification_is_well_formed(frame in arb_frame()) {
        let result = Classifier::default().classify(&frame);

        prop_assert!((0.0..=1.0).contains(&result.confidence));
        if frame.len() < 21 {
            prop_assert_eq!(result.label, Gesture::Unknown);
            prop_assert_eq!(result.confidence, 0.2);
        }
        // Exactly one of error / reason, except pinch which carries a distance
        let d = &result.debug;
        match (d.error, d.reason, d.pinch_distance) {
            (Some(_), None, None) => prop_assert!(d.fingers.is_none()),
            (None, Some(_), None) => prop_assert!(d.fingers.is_some()),
            (None, None, Some(_)) => prop_assert_eq!(result.label, Gesture::Pinch),
            other => prop_assert!(false, "unexpected debug combination {:?}", other),
        }
    }
}
