//! Check messages emitted by validators.
//!
//! Repair code matches on these strings, so validators must reuse them verbatim.

pub const BALL_ENC: &str = "Correct ball for encounter type.";
pub const BALL_ENC_MISMATCH: &str = "Can't have ball for encounter type.";
pub const BALL_SPECIES_PASS: &str = "Ball possible for species.";
pub const BALL_SPECIES: &str = "Can't obtain species in Ball.";
pub const BALL_NONE: &str = "No check satisfied, assuming illegal.";

pub const RIBBON_ALL_VALID: &str = "All ribbons accounted for.";
pub const RIBBON_INVALID: &str = "Invalid Ribbons:";
pub const MARK_UNSUPPORTED: &str = "Marks are not stored in this format.";

pub const ENCOUNTER_MATCH: &str = "Valid encounter match.";
pub const ENCOUNTER_INVALID: &str = "Unable to match an encounter from origin game.";
