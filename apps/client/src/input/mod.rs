pub mod commands;
pub mod gesture;
pub mod synthetic;

#[cfg(test)]
mod tests_props_gesture;

pub use commands::Command;
pub use gesture::{Axis, GestureOutcome, GestureRecognizer, GestureSession, Point};
pub use synthetic::{swipe_path, Swipe};
