//! Error types for the legalize workflow.
//!
//! A record that still fails validation after repair is not an error: it is reported through
//! [`ActiveOutcome::RepairFailed`](crate::workflow::ActiveOutcome::RepairFailed). Errors here
//! mean a collaborator could not run at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The requested box does not exist.
    #[error("box {group} does not exist (save has {count} boxes)")]
    NoSuchGroup { group: usize, count: usize },

    /// A repair collaborator failed outright.
    #[error("repair failed: {0:#}")]
    Repair(#[from] anyhow::Error),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::WorkflowError;

    #[test]
    fn no_such_group_names_both_numbers() {
        let err = WorkflowError::NoSuchGroup { group: 7, count: 3 };
        assert_eq!(err.to_string(), "box 7 does not exist (save has 3 boxes)");
    }

    #[test]
    fn repair_error_keeps_context_chain() {
        let inner = anyhow::anyhow!("disk gone").context("load encounter");
        let err = WorkflowError::from(inner);
        let text = err.to_string();
        assert!(text.contains("load encounter"));
        assert!(text.contains("disk gone"));
    }
}
