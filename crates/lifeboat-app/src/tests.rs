use std::io::Cursor;

use lifeboat_core::{EmbarkPort, Sex, Title};

use crate::form::read_submission;

fn run_form(answers: &str) -> Option<lifeboat_core::PassengerInput> {
    let mut input = Cursor::new(answers.to_string());
    let mut out = Vec::new();
    read_submission(&mut input, &mut out).unwrap()
}

#[test]
fn full_submission() {
    // stratum, sex, port, fare, age, sibsp, parch, title choice
    let passenger = run_form("6\nm\nS\n32\n25\n0\n0\n1\n").unwrap();
    assert_eq!(passenger.stratum, 6);
    assert_eq!(passenger.sex, Sex::Male);
    assert_eq!(passenger.embarked, EmbarkPort::S);
    assert_eq!(passenger.fare, 32.0);
    assert_eq!(passenger.age, 25);
    assert_eq!(passenger.title, Title::Mr);
    passenger.validate().unwrap();
}

#[test]
fn empty_answers_take_defaults() {
    let passenger = run_form("\n\n\n\n\n\n\n\n").unwrap();
    let defaults = lifeboat_core::PassengerInput::default();
    assert_eq!(passenger.stratum, defaults.stratum);
    assert_eq!(passenger.sex, defaults.sex);
    assert_eq!(passenger.fare, defaults.fare);
    assert_eq!(passenger.age, defaults.age);
    // Default title is the first offered for the default sex.
    assert_eq!(passenger.title, Title::Miss);
}

#[test]
fn title_menu_follows_sex() {
    // Female: option 2 is Mrs.
    let passenger = run_form("\nf\n\n\n\n\n\n2\n").unwrap();
    assert_eq!(passenger.title, Title::Mrs);
    // Male: option 2 is Master.
    let passenger = run_form("\nm\n\n\n\n\n\n2\n").unwrap();
    assert_eq!(passenger.title, Title::Master);
}

#[test]
fn invalid_answers_reprompt() {
    // "9" and "abc" are rejected for stratum; "4" is then accepted.
    let passenger = run_form("9\nabc\n4\nf\nQ\n12.5\n30\n1\n2\n3\n").unwrap();
    assert_eq!(passenger.stratum, 4);
    assert_eq!(passenger.embarked, EmbarkPort::Q);
    assert_eq!(passenger.fare, 12.5);
    assert_eq!(passenger.siblings_spouses, 1);
    assert_eq!(passenger.parents_children, 2);
    assert_eq!(passenger.title, Title::Rare);
}

#[test]
fn quit_aborts_the_form() {
    assert!(run_form("q\n").is_none());
    assert!(run_form("3\nm\nquit\n").is_none());
}

#[test]
fn eof_aborts_the_form() {
    assert!(run_form("3\nm\n").is_none());
}

// The one test that mutates the process environment; keep it that way so
// the suite can run in parallel.
#[test]
fn env_overrides_win_over_file() {
    let config_path = std::env::temp_dir().join("lifeboat-config-layering.toml");
    std::fs::write(
        &config_path,
        "model_path = \"/tmp/file-model.json\"\nschema_path = \"/tmp/file-columns.json\"\n",
    )
    .unwrap();
    std::env::set_var("LIFEBOAT_CONFIG", &config_path);
    std::env::set_var("LIFEBOAT_MODEL_PATH", "/tmp/env-model.json");

    let cfg = crate::config::AppConfig::load().unwrap();

    // The env value beats the file's; the file still supplies the field the
    // environment left alone.
    assert_eq!(
        cfg.model_path.as_deref(),
        Some(std::path::Path::new("/tmp/env-model.json"))
    );
    assert_eq!(
        cfg.schema_path.as_deref(),
        Some(std::path::Path::new("/tmp/file-columns.json"))
    );

    std::env::remove_var("LIFEBOAT_CONFIG");
    std::env::remove_var("LIFEBOAT_MODEL_PATH");
    std::fs::remove_file(&config_path).ok();
}
