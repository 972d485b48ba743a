//! Suggestion edits that rely on a validation pass.

mod ball;
mod ribbons;

pub use ball::{BallRequest, set_suggested_ball, valid_ball};
pub use ribbons::set_suggested_ribbons;
