//! Ribbon and mark catalogue.
//!
//! Every ribbon a record can carry is listed in [`RIBBONS`] together with how its value is
//! stored. Records hold only the ribbons that are set; unset flags and zero counts are absent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// How a ribbon value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RibbonKind {
    /// Present or absent.
    Flag,
    /// Small counter (memory ribbons).
    Count,
    /// Encounter mark; a flag that only exists in mark-capable formats.
    Mark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RibbonField {
    pub name: &'static str,
    pub kind: RibbonKind,
}

const fn flag(name: &'static str) -> RibbonField {
    RibbonField {
        name,
        kind: RibbonKind::Flag,
    }
}

const fn count(name: &'static str) -> RibbonField {
    RibbonField {
        name,
        kind: RibbonKind::Count,
    }
}

const fn mark(name: &'static str) -> RibbonField {
    RibbonField {
        name,
        kind: RibbonKind::Mark,
    }
}

pub const RIBBONS: &[RibbonField] = &[
    flag("RibbonChampionG3"),
    flag("RibbonChampionSinnoh"),
    flag("RibbonChampionKalos"),
    flag("RibbonChampionG6Hoenn"),
    flag("RibbonChampionAlola"),
    flag("RibbonChampionGalar"),
    flag("RibbonChampionPaldea"),
    flag("RibbonBestFriends"),
    flag("RibbonTraining"),
    flag("RibbonBattlerSkillful"),
    flag("RibbonBattlerExpert"),
    flag("RibbonEffort"),
    flag("RibbonAlert"),
    flag("RibbonShock"),
    flag("RibbonDowncast"),
    flag("RibbonCareless"),
    flag("RibbonRelax"),
    flag("RibbonSnooze"),
    flag("RibbonSmile"),
    flag("RibbonGorgeous"),
    flag("RibbonRoyal"),
    flag("RibbonGorgeousRoyal"),
    flag("RibbonArtist"),
    flag("RibbonFootprint"),
    flag("RibbonRecord"),
    flag("RibbonLegend"),
    flag("RibbonCountry"),
    flag("RibbonNational"),
    flag("RibbonEarth"),
    flag("RibbonWorld"),
    flag("RibbonClassic"),
    flag("RibbonPremier"),
    flag("RibbonEvent"),
    flag("RibbonBirthday"),
    flag("RibbonSpecial"),
    flag("RibbonSouvenir"),
    flag("RibbonWishing"),
    flag("RibbonChampionBattle"),
    flag("RibbonChampionRegional"),
    flag("RibbonChampionNational"),
    flag("RibbonChampionWorld"),
    flag("RibbonContestStar"),
    flag("RibbonMasterCoolness"),
    flag("RibbonMasterBeauty"),
    flag("RibbonMasterCuteness"),
    flag("RibbonMasterCleverness"),
    flag("RibbonMasterToughness"),
    flag("RibbonBattleRoyale"),
    flag("RibbonBattleTreeGreat"),
    flag("RibbonBattleTreeMaster"),
    flag("RibbonTowerMaster"),
    flag("RibbonMasterRank"),
    flag("RibbonHisui"),
    flag("RibbonTwinklingStar"),
    count("RibbonCountMemoryContest"),
    count("RibbonCountMemoryBattle"),
    mark("RibbonMarkLunchtime"),
    mark("RibbonMarkSleepyTime"),
    mark("RibbonMarkDusk"),
    mark("RibbonMarkDawn"),
    mark("RibbonMarkCloudy"),
    mark("RibbonMarkRainy"),
    mark("RibbonMarkStormy"),
    mark("RibbonMarkSnowy"),
    mark("RibbonMarkBlizzard"),
    mark("RibbonMarkDry"),
    mark("RibbonMarkSandstorm"),
    mark("RibbonMarkMisty"),
    mark("RibbonMarkDestiny"),
    mark("RibbonMarkFishing"),
    mark("RibbonMarkCurry"),
    mark("RibbonMarkUncommon"),
    mark("RibbonMarkRare"),
    mark("RibbonMarkRowdy"),
    mark("RibbonMarkAbsentMinded"),
    mark("RibbonMarkJittery"),
    mark("RibbonMarkExcited"),
    mark("RibbonMarkCharismatic"),
    mark("RibbonMarkCalmness"),
    mark("RibbonMarkIntense"),
];

pub fn lookup(name: &str) -> Option<&'static RibbonField> {
    RIBBONS.iter().find(|r| r.name == name)
}

/// Catalogue names starting with `prefix`, in catalogue order and without duplicates.
pub fn ribbon_names(prefix: &str) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for field in RIBBONS.iter().filter(|r| r.name.starts_with(prefix)) {
        if !out.contains(&field.name) {
            out.push(field.name);
        }
    }
    out
}

/// Encounter marks that a mark selector may hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Lunchtime,
    SleepyTime,
    Dusk,
    Dawn,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Blizzard,
    Dry,
    Sandstorm,
    Misty,
    Destiny,
    Fishing,
    Curry,
    Uncommon,
    Rare,
    Rowdy,
    AbsentMinded,
    Jittery,
    Excited,
    Charismatic,
    Calmness,
    Intense,
}

impl Mark {
    pub fn ribbon_name(self) -> &'static str {
        match self {
            Mark::Lunchtime => "RibbonMarkLunchtime",
            Mark::SleepyTime => "RibbonMarkSleepyTime",
            Mark::Dusk => "RibbonMarkDusk",
            Mark::Dawn => "RibbonMarkDawn",
            Mark::Cloudy => "RibbonMarkCloudy",
            Mark::Rainy => "RibbonMarkRainy",
            Mark::Stormy => "RibbonMarkStormy",
            Mark::Snowy => "RibbonMarkSnowy",
            Mark::Blizzard => "RibbonMarkBlizzard",
            Mark::Dry => "RibbonMarkDry",
            Mark::Sandstorm => "RibbonMarkSandstorm",
            Mark::Misty => "RibbonMarkMisty",
            Mark::Destiny => "RibbonMarkDestiny",
            Mark::Fishing => "RibbonMarkFishing",
            Mark::Curry => "RibbonMarkCurry",
            Mark::Uncommon => "RibbonMarkUncommon",
            Mark::Rare => "RibbonMarkRare",
            Mark::Rowdy => "RibbonMarkRowdy",
            Mark::AbsentMinded => "RibbonMarkAbsentMinded",
            Mark::Jittery => "RibbonMarkJittery",
            Mark::Excited => "RibbonMarkExcited",
            Mark::Charismatic => "RibbonMarkCharismatic",
            Mark::Calmness => "RibbonMarkCalmness",
            Mark::Intense => "RibbonMarkIntense",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RibbonError {
    #[error("unknown ribbon '{0}'")]
    Unknown(String),

    #[error("ribbon '{name}' is stored as {actual:?}, not {expected:?}")]
    KindMismatch {
        name: String,
        expected: RibbonKind,
        actual: RibbonKind,
    },
}

/// Write access to a record's ribbons by catalogue name.
pub trait RibbonCarrier {
    fn set_ribbon(&mut self, name: &str, value: bool) -> Result<(), RibbonError>;

    fn set_ribbon_count(&mut self, name: &str, value: u8) -> Result<(), RibbonError>;

    fn ribbon_value(&self, name: &str) -> Option<u8>;

    fn has_ribbon(&self, name: &str) -> bool {
        self.ribbon_value(name).is_some_and(|v| v > 0)
    }
}

/// Ribbons set on one record, keyed by catalogue name.
///
/// Only catalogue names are accepted when deserializing; zero values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u8>", into = "BTreeMap<String, u8>")]
pub struct RibbonSet {
    values: BTreeMap<String, u8>,
}

impl TryFrom<BTreeMap<String, u8>> for RibbonSet {
    type Error = RibbonError;

    fn try_from(raw: BTreeMap<String, u8>) -> Result<Self, Self::Error> {
        let mut values = BTreeMap::new();
        for (name, value) in raw {
            if lookup(&name).is_none() {
                return Err(RibbonError::Unknown(name));
            }
            if value > 0 {
                values.insert(name, value);
            }
        }
        Ok(Self { values })
    }
}

impl From<RibbonSet> for BTreeMap<String, u8> {
    fn from(set: RibbonSet) -> Self {
        set.values
    }
}

impl RibbonSet {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Names of every ribbon currently set, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn marks(&self) -> impl Iterator<Item = &str> {
        self.names()
            .filter(|n| lookup(n).is_some_and(|f| f.kind == RibbonKind::Mark))
    }

    pub fn set_mark(&mut self, mark: Mark) {
        self.values.insert(mark.ribbon_name().to_string(), 1);
    }

    /// Write the same value to many ribbons at once.
    ///
    /// Count ribbons receive `count`, every other kind receives `flag`.
    pub fn set_ribbon_values<'a, I>(&mut self, names: I, count: u8, flag: bool) -> Result<(), RibbonError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            let field = lookup(name).ok_or_else(|| RibbonError::Unknown(name.to_string()))?;
            match field.kind {
                RibbonKind::Count => self.set_ribbon_count(name, count)?,
                RibbonKind::Flag | RibbonKind::Mark => self.set_ribbon(name, flag)?,
            }
        }
        Ok(())
    }
}

impl RibbonCarrier for RibbonSet {
    fn set_ribbon(&mut self, name: &str, value: bool) -> Result<(), RibbonError> {
        let field = lookup(name).ok_or_else(|| RibbonError::Unknown(name.to_string()))?;
        if field.kind == RibbonKind::Count {
            return Err(RibbonError::KindMismatch {
                name: name.to_string(),
                expected: RibbonKind::Flag,
                actual: field.kind,
            });
        }
        if value {
            self.values.insert(field.name.to_string(), 1);
        } else {
            self.values.remove(field.name);
        }
        Ok(())
    }

    fn set_ribbon_count(&mut self, name: &str, value: u8) -> Result<(), RibbonError> {
        let field = lookup(name).ok_or_else(|| RibbonError::Unknown(name.to_string()))?;
        if field.kind != RibbonKind::Count {
            return Err(RibbonError::KindMismatch {
                name: name.to_string(),
                expected: RibbonKind::Count,
                actual: field.kind,
            });
        }
        if value == 0 {
            self.values.remove(field.name);
        } else {
            self.values.insert(field.name.to_string(), value);
        }
        Ok(())
    }

    fn ribbon_value(&self, name: &str) -> Option<u8> {
        self.values.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_names_are_unique() {
        let all = ribbon_names("");
        assert_eq!(all.len(), RIBBONS.len());
        assert!(all.iter().all(|n| n.starts_with("Ribbon")));
    }

    #[test]
    fn every_mark_is_in_catalogue_as_mark() {
        for m in [Mark::Lunchtime, Mark::Rare, Mark::Destiny, Mark::Intense] {
            let field = lookup(m.ribbon_name()).unwrap();
            assert_eq!(field.kind, RibbonKind::Mark);
        }
    }

    #[test]
    fn set_ribbon_values_splits_by_kind() {
        let mut set = RibbonSet::default();
        set.set_ribbon_values(
            ["RibbonCountMemoryContest", "RibbonEffort", "RibbonCountMemoryBattle"],
            5,
            true,
        )
        .unwrap();
        assert_eq!(set.ribbon_value("RibbonCountMemoryContest"), Some(5));
        assert_eq!(set.ribbon_value("RibbonCountMemoryBattle"), Some(5));
        assert_eq!(set.ribbon_value("RibbonEffort"), Some(1));

        set.set_ribbon_values(ribbon_names("RibbonCount"), 0, false).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut set = RibbonSet::default();
        let err = set.set_ribbon("RibbonCountMemoryBattle", true).unwrap_err();
        assert!(matches!(err, RibbonError::KindMismatch { .. }));
        let err = set.set_ribbon_count("RibbonEffort", 2).unwrap_err();
        assert!(matches!(err, RibbonError::KindMismatch { .. }));
        assert_eq!(
            set.set_ribbon("RibbonNope", true),
            Err(RibbonError::Unknown("RibbonNope".to_string()))
        );
    }

    #[test]
    fn marks_are_filtered_from_ribbons() {
        let mut set = RibbonSet::default();
        set.set_ribbon("RibbonEffort", true).unwrap();
        set.set_mark(Mark::Rare);
        assert_eq!(set.marks().collect::<Vec<_>>(), vec!["RibbonMarkRare"]);
    }
}
