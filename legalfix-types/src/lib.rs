//! Shared data model for the legalfix workspace.
//!
//! # Design constraints
//! - Records and save containers are serialized to disk as JSON.
//! - Reports are immutable values; callers never edit a report in place.
//! - Ribbon names are a closed, compile-time catalogue.

pub mod ball;
pub mod checks;
pub mod pokemon;
pub mod report;
pub mod ribbons;
pub mod save;

pub use ball::Ball;
pub use pokemon::{Color, Pokemon};
pub use report::{CheckIdentifier, CheckLine, ReportMode, Severity, ValidationReport};
pub use ribbons::{Mark, RibbonCarrier, RibbonField, RibbonKind, RibbonSet};
pub use save::SaveFile;

/// Species and location identifiers referenced by the repair rules.
pub mod ids {
    /// National dex number of Shedinja; never receives a random mark.
    pub const SHEDINJA: u16 = 292;

    /// Generation 5 met location used by Dream World distributions.
    pub const DREAM_WORLD_LOCATION: u16 = 75;

    /// First save format that stores marks alongside ribbons.
    pub const MARK_FORMAT: u8 = 8;
}
