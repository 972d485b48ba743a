//! Validate, repair, re-validate.
//!
//! The workflow never edits a record that already validates, and only replaces the caller's
//! working record when the repaired candidate validates.

use crate::error::WorkflowResult;
use crate::ports::{GroupRepairer, Notifier, RecordRepairer, SlotView};
use crate::settings::HelpLinks;
use legalfix_domain::Validator;
use legalfix_types::{Pokemon, ReportMode, ValidationReport};
use tracing::{debug, info, warn};

pub const MSG_LEGALIZED_ACTIVE: &str = "Legalized Active Pokemon!";
pub const MSG_UNABLE_ACTIVE: &str = "Unable to make the Active Pokemon legal!";
pub const MSG_HELP_DETAIL: &str =
    "Please refer to the wiki by clicking on the GitHub button for further help!";

/// Follow-up the user picked on the failure notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HelpChoice {
    OpenHelpChannel,
    OpenGuide,
    #[default]
    Dismiss,
}

impl HelpChoice {
    pub fn link(self, links: &HelpLinks) -> Option<&str> {
        match self {
            HelpChoice::OpenHelpChannel => Some(links.help_channel.as_str()),
            HelpChoice::OpenGuide => Some(links.guide.as_str()),
            HelpChoice::Dismiss => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveOutcome {
    /// Nothing to do; the record was left untouched.
    AlreadyValid,
    /// The working record was replaced by the repaired candidate.
    Legalized,
    /// The candidate still fails; the working record was left as it was.
    RepairFailed {
        report: ValidationReport,
        choice: HelpChoice,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    NoChange,
    Legalized { count: usize },
}

pub struct LegalizeWorkflow<'a> {
    validator: &'a dyn Validator,
    repairer: &'a dyn RecordRepairer,
    notifier: &'a dyn Notifier,
}

impl<'a> LegalizeWorkflow<'a> {
    pub fn new(
        validator: &'a dyn Validator,
        repairer: &'a dyn RecordRepairer,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            validator,
            repairer,
            notifier,
        }
    }

    /// Legalize the record currently being edited.
    pub fn legalize_active(&self, working: &mut Pokemon) -> WorkflowResult<ActiveOutcome> {
        let snapshot = working.clone();
        let report = self.validator.validate(&snapshot, ReportMode::Permissive);
        if report.valid() {
            debug!(record = %snapshot.label(), "already valid, not modifying");
            return Ok(ActiveOutcome::AlreadyValid);
        }

        let candidate = self.repairer.repair(&snapshot)?;

        let report = self.validator.validate(&candidate, ReportMode::Permissive);
        if !report.valid() {
            warn!(
                record = %snapshot.label(),
                violations = report.violations().count(),
                "repaired record still fails validation"
            );
            let detail = format!("{}\n\n{}", report.render().trim_end(), MSG_HELP_DETAIL);
            let choice = self.notifier.notify_error(MSG_UNABLE_ACTIVE, &detail);
            return Ok(ActiveOutcome::RepairFailed { report, choice });
        }

        *working = candidate;
        info!(record = %working.label(), "legalized active record");
        self.notifier.notify(MSG_LEGALIZED_ACTIVE);
        Ok(ActiveOutcome::Legalized)
    }

    pub fn legalize_current_group(
        &self,
        groups: &mut dyn GroupRepairer,
        view: &mut dyn SlotView,
    ) -> WorkflowResult<BulkOutcome> {
        let group = groups.current_group();
        let count = groups.legalize_group(group)?;
        Ok(self.finish_bulk(count, view, |n| {
            format!("Legalized {n} Pokémon in Current Box!")
        }))
    }

    pub fn legalize_all_groups(
        &self,
        groups: &mut dyn GroupRepairer,
        view: &mut dyn SlotView,
    ) -> WorkflowResult<BulkOutcome> {
        let count = groups.legalize_all_groups()?;
        Ok(self.finish_bulk(count, view, |n| {
            format!("Legalized {n} Pokémon across all boxes!")
        }))
    }

    fn finish_bulk(
        &self,
        count: usize,
        view: &mut dyn SlotView,
        message: impl FnOnce(usize) -> String,
    ) -> BulkOutcome {
        if count == 0 {
            debug!("bulk repair changed nothing");
            return BulkOutcome::NoChange;
        }
        view.reload_slots();
        info!(count, "bulk repair finished");
        self.notifier.notify(&message(count));
        BulkOutcome::Legalized { count }
    }
}
