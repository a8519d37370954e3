//! Pointer paths for driving the recognizer from line commands.

use super::gesture::{Point, PLAY_THRESHOLD, SWITCH_THRESHOLD};

const ORIGIN: Point = Point::new(200.0, 600.0);
const STEPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
}

/// Touch-start point followed by the move samples of a swipe that clears
/// its threshold. The last sample is where the pointer lifts.
pub fn swipe_path(swipe: Swipe) -> (Point, Vec<Point>) {
    let (dx, dy) = match swipe {
        Swipe::Left => (-(SWITCH_THRESHOLD * 1.5), 0.0),
        Swipe::Right => (SWITCH_THRESHOLD * 1.5, 0.0),
        Swipe::Up => (0.0, -(PLAY_THRESHOLD * 1.5)),
    };
    let samples = (1..=STEPS)
        .map(|i| {
            let t = i as f32 / STEPS as f32;
            Point::new(ORIGIN.x + dx * t, ORIGIN.y + dy * t)
        })
        .collect();
    (ORIGIN, samples)
}
