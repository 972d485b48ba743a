//! Serialization tests for the on-disk shapes of records and saves.

use legalfix_types::ribbons::RibbonCarrier;
use legalfix_types::{Ball, Color, Mark, Pokemon, SaveFile};
use pretty_assertions::assert_eq;

#[test]
fn save_file_parses_hand_written_json() {
    let json = r#"{
        "current_box": 1,
        "boxes": [
            [null],
            [
                {
                    "species": 25,
                    "nickname": "Sparky",
                    "generation": 8,
                    "format": 8,
                    "met_location": 30,
                    "ball": "la_poke",
                    "is_shiny": true,
                    "color": "yellow",
                    "ribbons": { "RibbonEffort": 1, "RibbonCountMemoryBattle": 3 }
                },
                null
            ]
        ]
    }"#;

    let save: SaveFile = serde_json::from_str(json).expect("parse save");
    assert_eq!(save.current_box, 1);
    assert_eq!(save.box_count(), 2);
    assert_eq!(save.record_count(), 1);

    let pk = save.slot(1, 0).expect("slot 1/0");
    assert_eq!(pk.ball, Ball::LAPoke);
    assert_eq!(pk.color, Color::Yellow);
    assert!(pk.ribbons.has_ribbon("RibbonEffort"));
    assert_eq!(pk.ribbons.ribbon_value("RibbonCountMemoryBattle"), Some(3));
    assert_eq!(pk.label(), "Sparky (#0025)");
}

#[test]
fn record_serializes_ribbons_as_a_flat_map() {
    let mut pk = Pokemon::new(133, 8, 8, 40);
    pk.ball = Ball::Dream;
    pk.ribbons.set_mark(Mark::Lunchtime);

    let value = serde_json::to_value(&pk).unwrap();
    assert_eq!(value["ball"], "dream");
    assert_eq!(value["ribbons"]["RibbonMarkLunchtime"], 1);
    assert!(value.get("nickname").is_none());

    let back: Pokemon = serde_json::from_value(value).unwrap();
    assert_eq!(back, pk);
}

#[test]
fn unknown_ribbon_name_fails_to_load() {
    let json = r#"{
        "species": 25, "generation": 8, "format": 8, "met_location": 30,
        "ribbons": { "RibbonClassic": 1, "RibbonShiny": 1 }
    }"#;

    let err = serde_json::from_str::<Pokemon>(json).unwrap_err();
    assert!(err.to_string().contains("unknown ribbon 'RibbonShiny'"), "{err}");
}

#[test]
fn zero_valued_ribbons_are_dropped_on_load() {
    let json = r#"{
        "species": 25, "generation": 8, "format": 8, "met_location": 30,
        "ribbons": { "RibbonClassic": 0, "RibbonEffort": 1 }
    }"#;

    let pk: Pokemon = serde_json::from_str(json).unwrap();
    assert_eq!(pk.ribbons.names().collect::<Vec<_>>(), vec!["RibbonEffort"]);
}
