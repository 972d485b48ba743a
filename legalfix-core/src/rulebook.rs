//! Table-driven legality data consumed by the default adapters.
//!
//! A rule book lists, per species, the balls and ribbons it may carry, and the encounters
//! records can be matched against. It stands in for a full rule engine and is deliberately
//! small: anything it does not list is treated as illegal.

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use legalfix_domain::Encounter;
use legalfix_types::ribbons::{self, RibbonKind};
use legalfix_types::{Ball, Pokemon};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RuleBookError {
    #[error("read rule book {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("parse rule book: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown ribbon '{name}' listed for species {species}")]
    UnknownRibbon { species: u16, name: String },

    #[error("'{name}' is a mark; list it under marks for species {species}")]
    MarkListedAsRibbon { species: u16, name: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRules {
    pub species: u16,

    #[serde(default)]
    pub balls: Vec<Ball>,

    /// Ribbons any record of this species may carry regardless of encounter.
    #[serde(default)]
    pub ribbons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBook {
    #[serde(default)]
    pub species: Vec<SpeciesRules>,

    #[serde(default)]
    pub encounters: Vec<Encounter>,
}

impl RuleBook {
    pub fn load(path: &Utf8Path) -> Result<Self, RuleBookError> {
        let contents = fs::read_to_string(path).map_err(|source| RuleBookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let book = Self::from_json(&contents)?;
        debug!(
            path = %path,
            species = book.species.len(),
            encounters = book.encounters.len(),
            "loaded rule book"
        );
        Ok(book)
    }

    pub fn from_json(contents: &str) -> Result<Self, RuleBookError> {
        let book: RuleBook = serde_json::from_str(contents)?;
        book.check()?;
        Ok(book)
    }

    /// Every ribbon name must be in the catalogue, and marks belong in `marks`.
    pub fn check(&self) -> Result<(), RuleBookError> {
        let species_lists = self.species.iter().map(|s| (s.species, &s.ribbons));
        let encounter_lists = self.encounters.iter().map(|e| (e.species, &e.ribbons));
        for (species, names) in species_lists.chain(encounter_lists) {
            for name in names {
                match ribbons::lookup(name) {
                    None => {
                        return Err(RuleBookError::UnknownRibbon {
                            species,
                            name: name.clone(),
                        });
                    }
                    Some(field) if field.kind == RibbonKind::Mark => {
                        return Err(RuleBookError::MarkListedAsRibbon {
                            species,
                            name: name.clone(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    pub fn species_rules(&self, species: u16) -> Option<&SpeciesRules> {
        self.species.iter().find(|s| s.species == species)
    }

    pub fn encounter_for(&self, pk: &Pokemon) -> Option<&Encounter> {
        self.encounters
            .iter()
            .find(|e| e.matches(pk.species, pk.generation, pk.met_location))
    }

    /// Union of species-wide and encounter ribbons, first occurrence wins.
    pub fn allowed_ribbons(&self, pk: &Pokemon) -> Vec<&str> {
        let species = self
            .species_rules(pk.species)
            .map(|s| s.ribbons.as_slice())
            .unwrap_or_default();
        let encounter = self
            .encounter_for(pk)
            .map(|e| e.ribbons.as_slice())
            .unwrap_or_default();

        let mut out: Vec<&str> = Vec::new();
        for name in species.iter().chain(encounter) {
            if !out.contains(&name.as_str()) {
                out.push(name);
            }
        }
        out
    }
}
