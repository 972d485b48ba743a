//! Clap-free settings for the legalize workflow.

use legalfix_domain::EditSettings;

pub const DEFAULT_HELP_CHANNEL: &str = "https://discord.gg/tDMvSRv";
pub const DEFAULT_GUIDE: &str =
    "https://github.com/architdate/PKHeX-Plugins/wiki/Getting-Started-with-Auto-Legality-Mod";

/// Where the failure notice's follow-up actions point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLinks {
    pub help_channel: String,
    pub guide: String,
}

impl Default for HelpLinks {
    fn default() -> Self {
        Self {
            help_channel: DEFAULT_HELP_CHANNEL.to_string(),
            guide: DEFAULT_GUIDE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LegalizeSettings {
    pub edit: EditSettings,
    pub help: HelpLinks,

    // Repair behaviour
    pub matching_ball: bool,
    pub all_valid_ribbons: bool,

    /// Seed for mark selection; `None` draws from the OS.
    pub mark_seed: Option<u64>,
}

impl Default for LegalizeSettings {
    fn default() -> Self {
        Self {
            edit: EditSettings::default(),
            help: HelpLinks::default(),
            matching_ball: true,
            all_valid_ribbons: true,
            mark_seed: None,
        }
    }
}
