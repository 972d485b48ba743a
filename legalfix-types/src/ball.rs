use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Capture ball stored on a record.
///
/// Discriminants match the in-game ball index, so `Ball::Poke as u8 == 4`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Ball {
    #[default]
    None = 0,
    Master = 1,
    Ultra = 2,
    Great = 3,
    Poke = 4,
    Safari = 5,
    Net = 6,
    Dive = 7,
    Nest = 8,
    Repeat = 9,
    Timer = 10,
    Luxury = 11,
    Premier = 12,
    Dusk = 13,
    Heal = 14,
    Quick = 15,
    Cherish = 16,
    Fast = 17,
    Level = 18,
    Lure = 19,
    Heavy = 20,
    Love = 21,
    Friend = 22,
    Moon = 23,
    Sport = 24,
    Dream = 25,
    Beast = 26,
    Strange = 27,
    #[serde(rename = "la_poke")]
    LAPoke = 28,
    #[serde(rename = "la_great")]
    LAGreat = 29,
    #[serde(rename = "la_ultra")]
    LAUltra = 30,
    #[serde(rename = "la_feather")]
    LAFeather = 31,
    #[serde(rename = "la_wing")]
    LAWing = 32,
    #[serde(rename = "la_jet")]
    LAJet = 33,
    #[serde(rename = "la_heavy")]
    LAHeavy = 34,
    #[serde(rename = "la_leaden")]
    LALeaden = 35,
    #[serde(rename = "la_gigaton")]
    LAGigaton = 36,
    #[serde(rename = "la_origin")]
    LAOrigin = 37,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown ball index {0}")]
pub struct UnknownBall(pub u8);

impl Ball {
    /// Index assigned when no better ball can be derived.
    pub const DEFAULT: Ball = Ball::Poke;

    pub const ALL: [Ball; 38] = [
        Ball::None,
        Ball::Master,
        Ball::Ultra,
        Ball::Great,
        Ball::Poke,
        Ball::Safari,
        Ball::Net,
        Ball::Dive,
        Ball::Nest,
        Ball::Repeat,
        Ball::Timer,
        Ball::Luxury,
        Ball::Premier,
        Ball::Dusk,
        Ball::Heal,
        Ball::Quick,
        Ball::Cherish,
        Ball::Fast,
        Ball::Level,
        Ball::Lure,
        Ball::Heavy,
        Ball::Love,
        Ball::Friend,
        Ball::Moon,
        Ball::Sport,
        Ball::Dream,
        Ball::Beast,
        Ball::Strange,
        Ball::LAPoke,
        Ball::LAGreat,
        Ball::LAUltra,
        Ball::LAFeather,
        Ball::LAWing,
        Ball::LAJet,
        Ball::LAHeavy,
        Ball::LALeaden,
        Ball::LAGigaton,
        Ball::LAOrigin,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Ball> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Hisui-style equivalent of a modern ball.
    ///
    /// Only Poke, Great, Ultra and Heavy have one; every other ball returns `None`
    /// and callers keep the original value.
    pub fn arceus_variant(self) -> Option<Ball> {
        match self {
            Ball::Poke => Some(Ball::LAPoke),
            Ball::Great => Some(Ball::LAGreat),
            Ball::Ultra => Some(Ball::LAUltra),
            Ball::Heavy => Some(Ball::LAHeavy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ball::None => "None",
            Ball::Master => "Master Ball",
            Ball::Ultra => "Ultra Ball",
            Ball::Great => "Great Ball",
            Ball::Poke => "Poké Ball",
            Ball::Safari => "Safari Ball",
            Ball::Net => "Net Ball",
            Ball::Dive => "Dive Ball",
            Ball::Nest => "Nest Ball",
            Ball::Repeat => "Repeat Ball",
            Ball::Timer => "Timer Ball",
            Ball::Luxury => "Luxury Ball",
            Ball::Premier => "Premier Ball",
            Ball::Dusk => "Dusk Ball",
            Ball::Heal => "Heal Ball",
            Ball::Quick => "Quick Ball",
            Ball::Cherish => "Cherish Ball",
            Ball::Fast => "Fast Ball",
            Ball::Level => "Level Ball",
            Ball::Lure => "Lure Ball",
            Ball::Heavy => "Heavy Ball",
            Ball::Love => "Love Ball",
            Ball::Friend => "Friend Ball",
            Ball::Moon => "Moon Ball",
            Ball::Sport => "Sport Ball",
            Ball::Dream => "Dream Ball",
            Ball::Beast => "Beast Ball",
            Ball::Strange => "Strange Ball",
            Ball::LAPoke => "Poké Ball (Hisui)",
            Ball::LAGreat => "Great Ball (Hisui)",
            Ball::LAUltra => "Ultra Ball (Hisui)",
            Ball::LAFeather => "Feather Ball",
            Ball::LAWing => "Wing Ball",
            Ball::LAJet => "Jet Ball",
            Ball::LAHeavy => "Heavy Ball (Hisui)",
            Ball::LALeaden => "Leaden Ball",
            Ball::LAGigaton => "Gigaton Ball",
            Ball::LAOrigin => "Origin Ball",
        }
    }
}

impl TryFrom<u8> for Ball {
    type Error = UnknownBall;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ball::from_u8(value).ok_or(UnknownBall(value))
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
