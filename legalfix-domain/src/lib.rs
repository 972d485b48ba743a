//! Domain logic: suggest replacement values for constrained record attributes.
//!
//! This crate owns *what* a repaired ball or ribbon set should be. It does not own the rule
//! engine that judges a record; that is consumed through the [`Validator`] port.

mod edits;
mod encounter;
mod ports;
mod settings;

pub use edits::{BallRequest, set_suggested_ball, set_suggested_ribbons, valid_ball};
pub use encounter::{BattleTemplate, Encounter};
pub use ports::{BallMatcher, MarkSelector, RibbonApplicator, Validator};
pub use settings::{EditContext, EditSettings};
