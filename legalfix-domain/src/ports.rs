use crate::encounter::{BattleTemplate, Encounter};
use legalfix_types::{Ball, Mark, Pokemon, ReportMode, ValidationReport};

/// Rule engine that judges a record snapshot.
///
/// Implementations must be pure with respect to the record: validating never edits it.
pub trait Validator {
    fn validate(&self, pk: &Pokemon, mode: ReportMode) -> ValidationReport;
}

/// Cosmetic ball suggestions.
pub trait BallMatcher {
    fn matching_ball(&self, pk: &Pokemon) -> Ball;

    fn matching_shiny_ball(&self, pk: &Pokemon) -> Ball;
}

/// Bulk ribbon edits backed by knowledge of which ribbons a record may hold.
pub trait RibbonApplicator {
    fn set_all_valid_ribbons(&self, pk: &mut Pokemon);

    fn clear_all_valid_ribbons(&self, pk: &mut Pokemon);
}

pub trait MarkSelector {
    /// Pick a mark the record could legally carry, if any.
    fn random_valid_mark(
        &self,
        pk: &Pokemon,
        set: &BattleTemplate,
        enc: &Encounter,
    ) -> Option<Mark>;
}
