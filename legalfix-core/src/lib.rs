//! Embeddable core library for legalfix.
//!
//! # Port traits
//!
//! Everything outside the workflow is reached through port traits in [`ports`]:
//! - [`RecordRepairer`](ports::RecordRepairer) — repair one record
//! - [`GroupRepairer`](ports::GroupRepairer) — repair a box or every box
//! - [`SlotView`](ports::SlotView) — refresh a cached view of the boxes
//! - [`Notifier`](ports::Notifier) — tell the user what happened
//!
//! The [`adapters`] module provides default implementations backed by a [`RuleBook`].
//!
//! # Entry points
//!
//! - [`LegalizeWorkflow::legalize_active`](workflow::LegalizeWorkflow::legalize_active)
//! - [`LegalizeWorkflow::legalize_current_group`](workflow::LegalizeWorkflow::legalize_current_group)
//! - [`LegalizeWorkflow::legalize_all_groups`](workflow::LegalizeWorkflow::legalize_all_groups)

pub mod adapters;
pub mod dispatch;
pub mod error;
pub mod ports;
pub mod rulebook;
pub mod settings;
pub mod workflow;

pub use dispatch::{LegalizeCommand, Modifiers};
pub use error::WorkflowError;
pub use rulebook::{RuleBook, RuleBookError};
pub use settings::{HelpLinks, LegalizeSettings};
pub use workflow::{ActiveOutcome, BulkOutcome, HelpChoice, LegalizeWorkflow};

// Re-export the domain ports so embedders don't need legalfix-domain directly.
pub use legalfix_domain::{BallMatcher, MarkSelector, RibbonApplicator, Validator};
