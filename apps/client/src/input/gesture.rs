//! Raw pointer samples to card gestures.
//!
//! One session spans touch-start to touch-end. The axis locks the first
//! time the pointer leaves the dead zone and stays locked until release.

/// Pointer travel (on the dominant axis) ignored before the axis locks.
pub const DEAD_ZONE: f32 = 10.0;
/// Horizontal travel past which a release switches the displayed card.
pub const SWITCH_THRESHOLD: f32 = 50.0;
/// Upward travel past which a release plays the selected card.
pub const PLAY_THRESHOLD: f32 = 100.0;

/// Screen coordinates; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    None,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub origin: Point,
    pub latest: Point,
    pub axis: Axis,
}

impl GestureSession {
    fn delta(&self) -> (f32, f32) {
        (self.latest.x - self.origin.x, self.latest.y - self.origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// `+1` for a rightward swipe, `-1` for leftward.
    SwitchCard { direction: i8 },
    PlayCard { index: usize },
    Cancel,
}

/// Owns at most one open [`GestureSession`].
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    session: Option<GestureSession>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Touch-start. Any session still open is dropped without an outcome.
    pub fn begin(&mut self, at: Point) {
        self.session = Some(GestureSession {
            origin: at,
            latest: at,
            axis: Axis::None,
        });
    }

    /// Touch-move. Returns the lift to show while the gesture is an upward
    /// vertical drag, `None` otherwise.
    pub fn update(&mut self, at: Point) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.latest = at;
        let (dx, dy) = session.delta();

        if session.axis == Axis::None && dx.abs().max(dy.abs()) > DEAD_ZONE {
            session.axis = if dx.abs() >= dy.abs() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
        }

        (session.axis == Axis::Vertical && dy < 0.0).then_some(-dy)
    }

    /// Touch-end. Closes the session and classifies it against the latest
    /// sample. `None` when no session was open.
    pub fn finish(&mut self, selected_index: usize) -> Option<GestureOutcome> {
        let session = self.session.take()?;
        let (dx, dy) = session.delta();

        let outcome = match session.axis {
            Axis::Horizontal if dx.abs() > SWITCH_THRESHOLD => GestureOutcome::SwitchCard {
                direction: if dx > 0.0 { 1 } else { -1 },
            },
            Axis::Vertical if -dy > PLAY_THRESHOLD => GestureOutcome::PlayCard {
                index: selected_index,
            },
            _ => GestureOutcome::Cancel,
        };
        Some(outcome)
    }

    /// Drops the open session, if any, without an outcome.
    pub fn discard(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn axis(&self) -> Axis {
        self.session.map(|s| s.axis).unwrap_or_default()
    }
}
