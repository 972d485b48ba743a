//! Configuration file loading for legalfix.
//!
//! Discovers and loads `legalfix.toml` from the directory holding the save file.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use legalfix_core::settings::{DEFAULT_GUIDE, DEFAULT_HELP_CHANNEL};
use legalfix_core::{HelpLinks, LegalizeSettings};
use legalfix_domain::EditSettings;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "legalfix.toml";

/// Top-level configuration from legalfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegalfixConfig {
    pub edit: EditConfig,
    pub repair: RepairConfig,
    pub help: HelpConfig,
    pub marks: MarksConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Use Hisui balls for Legends: Arceus records when an explicit ball is requested.
    pub replace_ball_prefix_la: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    pub matching_ball: bool,
    pub all_valid_ribbons: bool,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            matching_ball: true,
            all_valid_ribbons: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    pub help_channel: String,
    pub guide: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            help_channel: DEFAULT_HELP_CHANNEL.to_string(),
            guide: DEFAULT_GUIDE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarksConfig {
    /// Fixed seed for mark selection (reproducible runs).
    pub seed: Option<u64>,
}

/// Discover the legalfix.toml config file.
///
/// Searches for `legalfix.toml` in `dir`, normally the directory holding the save file.
/// Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a legalfix.toml config file.
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<LegalfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<LegalfixConfig> {
    let config: LegalfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from an explicit path, or from next to the save file.
///
/// Returns the default config if no explicit path is given and none is found.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    save_path: &Utf8Path,
) -> anyhow::Result<LegalfixConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let dir = save_path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or(Utf8Path::new("."));
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(LegalfixConfig::default()),
    }
}

/// CLI overrides for the legalize command. Unset flags keep the config value.
#[derive(Debug, Clone, Default)]
pub struct LegalizeOverrides {
    pub replace_ball_prefix_la: bool,
    pub no_matching_ball: bool,
    pub clear_ribbons: bool,
    pub seed: Option<u64>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: LegalfixConfig,
}

impl ConfigMerger {
    pub fn new(config: LegalfixConfig) -> Self {
        Self { config }
    }

    /// CLI boolean flags override config file settings when explicitly set.
    pub fn merge_legalize_args(self, cli: &LegalizeOverrides) -> LegalizeSettings {
        LegalizeSettings {
            edit: EditSettings {
                replace_ball_prefix_la: cli.replace_ball_prefix_la
                    || self.config.edit.replace_ball_prefix_la,
            },
            help: HelpLinks {
                help_channel: self.config.help.help_channel,
                guide: self.config.help.guide,
            },
            matching_ball: self.config.repair.matching_ball && !cli.no_matching_ball,
            all_valid_ribbons: self.config.repair.all_valid_ribbons && !cli.clear_ribbons,
            mark_seed: cli.seed.or(self.config.marks.seed),
        }
    }
}
