//! Port traits abstracting the workflow's collaborators.

use crate::error::WorkflowResult;
use crate::workflow::HelpChoice;
use legalfix_types::Pokemon;

/// Full-record repair.
///
/// Returns the candidate to re-validate; the input snapshot is never edited.
pub trait RecordRepairer {
    fn repair(&self, pk: &Pokemon) -> anyhow::Result<Pokemon>;
}

/// Bulk repair over boxes. Counts are records that were changed and now validate.
pub trait GroupRepairer {
    fn current_group(&self) -> usize;

    fn legalize_group(&mut self, group: usize) -> WorkflowResult<usize>;

    fn legalize_all_groups(&mut self) -> WorkflowResult<usize>;
}

/// Cached presentation of the boxes.
pub trait SlotView {
    fn reload_slots(&mut self);
}

/// User-facing notices.
pub trait Notifier {
    fn notify(&self, message: &str);

    /// Report a failure and return which follow-up the user picked.
    fn notify_error(&self, message: &str, detail: &str) -> HelpChoice;
}
