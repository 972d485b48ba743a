//! End-to-end tests for the legalfix binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RULES: &str = r#"{
    "species": [
        { "species": 25, "balls": ["poke", "great", "level"] },
        { "species": 151, "balls": ["poke"] }
    ],
    "encounters": [
        { "species": 25, "generation": 8, "location": 30, "ribbons": ["RibbonEffort"] },
        { "species": 151, "generation": 5, "location": 75, "balls": ["dream"] },
        { "species": 483, "generation": 8, "location": 100, "balls": ["great", "la_great"] }
    ]
}"#;

// Box 0: a fixable Pikachu and an unknown species. Box 1: a forced-ball
// encounter and a Legends: Arceus record.
const SAVE: &str = r#"{
    "current_box": 0,
    "boxes": [
        [
            { "species": 25, "generation": 8, "format": 8, "met_location": 30,
              "ball": "master", "color": "yellow" },
            { "species": 999, "generation": 8, "format": 8, "met_location": 1, "ball": "poke" },
            null
        ],
        [
            { "species": 151, "generation": 5, "format": 8, "met_location": 75, "ball": "poke" },
            { "species": 483, "generation": 8, "format": 8, "met_location": 100,
              "ball": "master", "arceus_origin": true }
        ]
    ]
}"#;

fn legalfix() -> Command {
    Command::cargo_bin("legalfix").expect("legalfix binary")
}

struct Fixture {
    _dir: TempDir,
    save: PathBuf,
    rules: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let save = dir.path().join("save.json");
        let rules = dir.path().join("rules.json");
        fs::write(&save, SAVE).unwrap();
        fs::write(&rules, RULES).unwrap();
        Self {
            _dir: dir,
            save,
            rules,
        }
    }

    fn dir(&self) -> &Path {
        self.save.parent().unwrap()
    }

    fn cmd(&self, sub: &str) -> Command {
        let mut cmd = legalfix();
        cmd.arg(sub)
            .arg("--save")
            .arg(&self.save)
            .arg("--rules")
            .arg(&self.rules);
        cmd
    }

    fn saved(&self) -> Value {
        serde_json::from_str(&fs::read_to_string(&self.save).unwrap()).unwrap()
    }
}

#[test]
fn legalize_active_repairs_and_writes() {
    let fx = Fixture::new();

    fx.cmd("legalize")
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("Legalized Active Pokemon!"));

    let saved = fx.saved();
    let pk = &saved["boxes"][0][0];
    assert_eq!(pk["ball"], "level");
    assert_eq!(pk["ribbons"]["RibbonEffort"], 1);
}

#[test]
fn legalize_without_write_leaves_file_alone() {
    let fx = Fixture::new();
    let before = fs::read_to_string(&fx.save).unwrap();

    fx.cmd("legalize").assert().success();

    assert_eq!(fs::read_to_string(&fx.save).unwrap(), before);
}

#[test]
fn legalize_already_valid_record_reports_no_change() {
    let fx = Fixture::new();
    fx.cmd("legalize").arg("--write").assert().success();

    fx.cmd("legalize")
        .assert()
        .success()
        .stdout(predicate::str::contains("already legal"));
}

#[test]
fn legalize_failure_exits_2_and_prints_chosen_link() {
    let fx = Fixture::new();
    let before = fs::read_to_string(&fx.save).unwrap();

    fx.cmd("legalize")
        .args(["--slot", "1", "--on-failure", "guide", "--write"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Unable to make the Active Pokemon legal!",
        ))
        .stderr(predicate::str::contains("Please refer to the wiki"))
        .stdout(predicate::str::contains("Getting-Started-with-Auto-Legality-Mod"));

    assert_eq!(fs::read_to_string(&fx.save).unwrap(), before);
}

#[test]
fn legalize_failure_with_dismiss_prints_no_link() {
    let fx = Fixture::new();

    fx.cmd("legalize")
        .args(["--slot", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("https://").not());
}

#[test]
fn control_legalizes_current_box() {
    let fx = Fixture::new();

    fx.cmd("legalize")
        .args(["--control", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Legalized 1 Pokémon in Current Box!"))
        .stdout(predicate::str::contains("*box 0: 1/2 legal"));

    let saved = fx.saved();
    assert_eq!(saved["boxes"][0][0]["ball"], "level");
    assert_eq!(saved["boxes"][1][0]["ball"], "poke");
}

#[test]
fn control_shift_legalizes_every_box() {
    let fx = Fixture::new();

    fx.cmd("legalize")
        .args(["--control", "--shift", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Legalized 3 Pokémon across all boxes!",
        ));

    let saved = fx.saved();
    assert_eq!(saved["boxes"][1][0]["ball"], "dream");
    assert_eq!(saved["boxes"][1][1]["ball"], "great");
}

#[test]
fn bulk_with_nothing_to_fix_is_silent() {
    let fx = Fixture::new();
    fx.cmd("legalize")
        .args(["--control", "--write"])
        .assert()
        .success();

    fx.cmd("legalize")
        .arg("--control")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn shift_alone_targets_the_active_record() {
    let fx = Fixture::new();

    fx.cmd("legalize")
        .arg("--shift")
        .assert()
        .success()
        .stdout(predicate::str::contains("Legalized Active Pokemon!"));
}

#[test]
fn config_file_enables_hisui_balls() {
    let fx = Fixture::new();
    fs::write(
        fx.dir().join("legalfix.toml"),
        "[edit]\nreplace_ball_prefix_la = true\n",
    )
    .unwrap();

    fx.cmd("legalize")
        .args(["--box", "1", "--slot", "1", "--write"])
        .assert()
        .success();

    assert_eq!(fx.saved()["boxes"][1][1]["ball"], "la_great");
}

#[test]
fn la_balls_flag_matches_config() {
    let fx = Fixture::new();

    fx.cmd("legalize")
        .args(["--box", "1", "--slot", "1", "--la-balls", "--write"])
        .assert()
        .success();

    assert_eq!(fx.saved()["boxes"][1][1]["ball"], "la_great");
}

#[test]
fn check_reports_ball_problem() {
    let fx = Fixture::new();

    fx.cmd("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid: Ball: Can't obtain species in Ball."));
}

#[test]
fn strict_check_lists_passing_lines() {
    let fx = Fixture::new();
    fx.cmd("legalize").arg("--write").assert().success();

    fx.cmd("check")
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid: Ball: Ball possible for species."));

    fx.cmd("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Legal!"));
}

#[test]
fn empty_slot_is_a_tool_error() {
    let fx = Fixture::new();

    fx.cmd("legalize").args(["--slot", "2"]).assert().code(1);
}

#[test]
fn missing_rule_book_is_a_tool_error() {
    let fx = Fixture::new();
    legalfix()
        .arg("check")
        .arg("--save")
        .arg(&fx.save)
        .args(["--rules", "/definitely/not/here.json"])
        .assert()
        .code(1);
}

#[test]
fn unknown_ribbon_in_save_is_a_load_error() {
    let fx = Fixture::new();
    let save = SAVE.replacen(
        r#""color": "yellow" }"#,
        r#""color": "yellow", "ribbons": { "RibbonClassic": 1, "RibbonShiny": 1 } }"#,
        1,
    );
    assert_ne!(save, SAVE);
    fs::write(&fx.save, save).unwrap();

    fx.cmd("legalize")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("RibbonShiny"));
}

#[test]
fn balls_lists_hisui_mapping() {
    legalfix()
        .arg("balls")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> Great Ball (Hisui)"))
        .stdout(predicate::str::contains("Origin Ball"));
}

#[test]
fn help_lists_commands() {
    legalfix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("legalize"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("balls"));
}
