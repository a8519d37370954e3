//! Property-based tests for axis locking and outcome classification.

use proptest::prelude::*;

use super::gesture::{Axis, GestureOutcome, GestureRecognizer, Point, DEAD_ZONE};

fn offset() -> impl Strategy<Value = (f32, f32)> {
    (-300.0f32..300.0, -300.0f32..300.0)
}

proptest! {
    /// Once an axis is chosen, later samples never change it.
    #[test]
    fn prop_axis_never_changes_once_locked(path in prop::collection::vec(offset(), 1..24)) {
        let mut r = GestureRecognizer::new();
        r.begin(Point::new(0.0, 0.0));
        let mut locked = Axis::None;
        for (x, y) in path {
            r.update(Point::new(x, y));
            if locked == Axis::None {
                locked = r.axis();
            } else {
                prop_assert_eq!(r.axis(), locked);
            }
        }
    }

    /// The first sample outside the dead zone picks the dominant axis,
    /// horizontal on ties.
    #[test]
    fn prop_first_exit_picks_dominant_axis((x, y) in offset()) {
        prop_assume!(x.abs().max(y.abs()) > DEAD_ZONE);
        let mut r = GestureRecognizer::new();
        r.begin(Point::new(0.0, 0.0));
        r.update(Point::new(x, y));
        let expected = if x.abs() >= y.abs() { Axis::Horizontal } else { Axis::Vertical };
        prop_assert_eq!(r.axis(), expected);
    }

    /// Every session yields exactly one outcome and then is closed.
    #[test]
    fn prop_one_outcome_per_session(
        path in prop::collection::vec(offset(), 0..12),
        selected in 0usize..2,
    ) {
        let mut r = GestureRecognizer::new();
        r.begin(Point::new(0.0, 0.0));
        for (x, y) in path {
            r.update(Point::new(x, y));
        }
        let outcome = r.finish(selected);
        prop_assert!(outcome.is_some());
        if let Some(GestureOutcome::PlayCard { index }) = outcome {
            prop_assert_eq!(index, selected);
        }
        prop_assert_eq!(r.finish(selected), None);
    }
}
