//! Stable exit codes for `food-lottery` commands.

/// Command succeeded (a food was drawn, or the session ended normally).
pub const OK: i32 = 0;
/// Command failed due to a missing/invalid preferences or settings file, or other errors.
pub const INVALID: i32 = 1;
/// `food-lottery draw` found no candidates to draw from.
pub const EMPTY_POOL: i32 = 2;
