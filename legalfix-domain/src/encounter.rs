use legalfix_types::{Ball, Mark};
use serde::{Deserialize, Serialize};

/// Requested set the user wants the record to match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleTemplate {
    pub species: u16,

    #[serde(default)]
    pub form: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default)]
    pub shiny: bool,

    #[serde(default)]
    pub ball: Ball,
}

/// Encounter a record was matched against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub species: u16,
    pub generation: u8,
    pub location: u16,

    /// Balls this encounter forces; empty means any ball the species allows.
    #[serde(default)]
    pub balls: Vec<Ball>,

    #[serde(default)]
    pub ribbons: Vec<String>,

    #[serde(default)]
    pub marks: Vec<Mark>,
}

impl Encounter {
    pub fn matches(&self, species: u16, generation: u8, location: u16) -> bool {
        self.species == species && self.generation == generation && self.location == location
    }

    pub fn forces_ball(&self) -> bool {
        !self.balls.is_empty()
    }
}
