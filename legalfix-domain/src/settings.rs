use crate::ports::{BallMatcher, MarkSelector, RibbonApplicator, Validator};

/// Knobs for attribute edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditSettings {
    /// Swap Poke/Great/Ultra/Heavy for their Hisui variants on Legends: Arceus records.
    pub replace_ball_prefix_la: bool,
}

/// Collaborators and settings shared by every edit in one invocation.
#[derive(Clone, Copy)]
pub struct EditContext<'a> {
    pub validator: &'a dyn Validator,
    pub balls: &'a dyn BallMatcher,
    pub ribbons: &'a dyn RibbonApplicator,
    pub marks: &'a dyn MarkSelector,
    pub settings: EditSettings,
}

impl<'a> EditContext<'a> {
    pub fn new(
        validator: &'a dyn Validator,
        balls: &'a dyn BallMatcher,
        ribbons: &'a dyn RibbonApplicator,
        marks: &'a dyn MarkSelector,
        settings: EditSettings,
    ) -> Self {
        Self {
            validator,
            balls,
            ribbons,
            marks,
            settings,
        }
    }
}

impl std::fmt::Debug for EditContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
