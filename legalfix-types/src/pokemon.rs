use crate::ball::Ball;
use crate::ids;
use crate::ribbons::RibbonSet;
use serde::{Deserialize, Serialize};

/// Pokédex colour of a species, used for cosmetic ball matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Black,
    Brown,
    Purple,
    Gray,
    #[default]
    White,
    Pink,
}

/// One creature record as edited by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub species: u16,

    #[serde(default)]
    pub form: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Origin generation.
    pub generation: u8,

    /// Save format the record currently lives in.
    pub format: u8,

    pub met_location: u16,

    #[serde(default)]
    pub ball: Ball,

    #[serde(default)]
    pub is_shiny: bool,

    #[serde(default)]
    pub color: Color,

    /// Originates from the Legends: Arceus encounter family.
    #[serde(default)]
    pub arceus_origin: bool,

    #[serde(default)]
    pub ribbons: RibbonSet,
}

impl Pokemon {
    pub fn new(species: u16, generation: u8, format: u8, met_location: u16) -> Self {
        Self {
            species,
            form: 0,
            nickname: None,
            generation,
            format,
            met_location,
            ball: Ball::None,
            is_shiny: false,
            color: Color::default(),
            arceus_origin: false,
            ribbons: RibbonSet::default(),
        }
    }

    pub fn supports_marks(&self) -> bool {
        self.format >= ids::MARK_FORMAT
    }

    pub fn is_dream_world(&self) -> bool {
        self.generation == 5 && self.met_location == ids::DREAM_WORLD_LOCATION
    }

    /// Short label for logs and notices.
    pub fn label(&self) -> String {
        match &self.nickname {
            Some(n) => format!("{} (#{:04})", n, self.species),
            None => format!("#{:04}", self.species),
        }
    }
}
