use serde::{Deserialize, Serialize};
use std::fmt;

/// Which lines a report keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Only problems are listed.
    #[default]
    Permissive,
    /// Every check is listed, including the ones that passed.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Valid,
    Fishy,
    Invalid,
}

/// Attribute a check line is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckIdentifier {
    Ball,
    Ribbon,
    Mark,
    Encounter,
    Misc,
}

impl fmt::Display for CheckIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckIdentifier::Ball => "Ball",
            CheckIdentifier::Ribbon => "Ribbon",
            CheckIdentifier::Mark => "Mark",
            CheckIdentifier::Encounter => "Encounter",
            CheckIdentifier::Misc => "Misc",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckLine {
    pub severity: Severity,
    pub identifier: CheckIdentifier,
    pub comment: String,
}

impl CheckLine {
    pub fn new(severity: Severity, identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self {
            severity,
            identifier,
            comment: comment.into(),
        }
    }

    pub fn valid(identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self::new(Severity::Valid, identifier, comment)
    }

    pub fn invalid(identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self::new(Severity::Invalid, identifier, comment)
    }
}

/// Result of validating one record snapshot.
///
/// Built once per validation call and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    valid: bool,
    mode: ReportMode,
    lines: Vec<CheckLine>,
}

impl ValidationReport {
    /// Build a report from every check result.
    ///
    /// The verdict is computed over all lines before the mode filter drops passing ones.
    pub fn from_checks(checks: Vec<CheckLine>, mode: ReportMode) -> Self {
        let valid = checks.iter().all(|c| c.severity != Severity::Invalid);
        let lines = match mode {
            ReportMode::Strict => checks,
            ReportMode::Permissive => checks
                .into_iter()
                .filter(|c| c.severity != Severity::Valid)
                .collect(),
        };
        Self { valid, mode, lines }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    pub fn lines(&self) -> &[CheckLine] {
        &self.lines
    }

    /// Substring test across every listed line.
    pub fn contains(&self, message: &str) -> bool {
        self.lines.iter().any(|l| l.comment.contains(message))
    }

    pub fn violations(&self) -> impl Iterator<Item = &CheckLine> {
        self.lines.iter().filter(|l| l.severity == Severity::Invalid)
    }

    /// Human-readable text, one line per check.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return if self.valid {
                "Legal!".to_string()
            } else {
                "Illegal!".to_string()
            };
        }
        let mut out = String::new();
        for line in &self.lines {
            let tag = match line.severity {
                Severity::Valid => "Valid",
                Severity::Fishy => "Fishy",
                Severity::Invalid => "Invalid",
            };
            out.push_str(&format!("{}: {}: {}\n", tag, line.identifier, line.comment));
        }
        out
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks;

    fn checks() -> Vec<CheckLine> {
        vec![
            CheckLine::valid(CheckIdentifier::Encounter, checks::ENCOUNTER_MATCH),
            CheckLine::invalid(CheckIdentifier::Ball, checks::BALL_ENC_MISMATCH),
        ]
    }

    #[test]
    fn permissive_drops_passing_lines() {
        let report = ValidationReport::from_checks(checks(), ReportMode::Permissive);
        assert!(!report.valid());
        assert_eq!(report.lines().len(), 1);
        assert!(report.contains(checks::BALL_ENC_MISMATCH));
        assert!(!report.contains(checks::ENCOUNTER_MATCH));
    }

    #[test]
    fn strict_keeps_everything() {
        let report = ValidationReport::from_checks(checks(), ReportMode::Strict);
        assert_eq!(report.mode(), ReportMode::Strict);
        assert_eq!(report.lines().len(), 2);
        assert!(report.contains(checks::ENCOUNTER_MATCH));
        assert_eq!(report.violations().count(), 1);
    }

    #[test]
    fn fishy_does_not_fail_the_verdict() {
        let report = ValidationReport::from_checks(
            vec![CheckLine::new(Severity::Fishy, CheckIdentifier::Misc, "odd")],
            ReportMode::Permissive,
        );
        assert!(report.valid());
        assert_eq!(report.render(), "Fishy: Misc: odd\n");
    }

    #[test]
    fn empty_report_renders_verdict() {
        let report = ValidationReport::from_checks(vec![], ReportMode::Permissive);
        assert_eq!(report.to_string(), "Legal!");
    }
}
