//! Clean-air streak calculation.

mod counter;

pub use counter::{advance, StreakUpdate};
