//! End-to-end tests for the riskwiz binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The binary with an isolated (absent) config file
fn riskwiz(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("riskwiz").unwrap();
    cmd.env("RISKWIZ_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn themes_lists_all_seven() {
    let dir = tempfile::tempdir().unwrap();
    let themes = json_stdout(riskwiz(&dir).args(["--output", "json", "themes"]));

    let themes = themes.as_array().unwrap();
    assert_eq!(themes.len(), 7);
    assert!(themes
        .iter()
        .any(|t| t["id"] == "vibration" && t["engine"] == "vibration-rules"));
    assert!(themes.iter().any(|t| t["id"] == "climate" && t["engine"] == "-"));
}

#[test]
fn themes_table_shows_dutch_names() {
    let dir = tempfile::tempdir().unwrap();
    riskwiz(&dir)
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trillingen"))
        .stdout(predicate::str::contains("Gevaarlijke stoffen"));
}

#[test]
fn schema_prints_steps_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let schema = json_stdout(riskwiz(&dir).args(["--output", "json", "schema", "vibration"]));

    assert_eq!(schema["theme"], "vibration");
    assert_eq!(schema["steps"].as_array().unwrap().len(), 3);
    assert_eq!(schema["steps"][0]["questions"][0]["id"], "vib-type");
}

#[test]
fn assess_hav_long_with_complaints() {
    let dir = tempfile::tempdir().unwrap();
    let answers = fixture("vibration_hav_long.json");
    let verdict = json_stdout(riskwiz(&dir).args(["--output", "json", "assess", "vibration", "--answers"]).arg(&answers));

    assert_eq!(verdict["overall_level"], "high");
    assert_eq!(verdict["findings"][0]["topic"], "Hand-armtrillingen");
    assert_eq!(verdict["recommendations"][0]["priority"], 1);
}

#[test]
fn assess_yaml_answers() {
    let dir = tempfile::tempdir().unwrap();
    let verdict = json_stdout(
        riskwiz(&dir)
            .args(["--output", "json", "assess", "sound", "--answers"])
            .arg(fixture("sound_shouting.yaml")),
    );

    assert_eq!(verdict["overall_level"], "high");
    let topics: Vec<&str> = verdict["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["topic"].as_str().unwrap())
        .collect();
    assert_eq!(topics, vec!["Lawaai", "Impulsgeluid"]);
}

#[test]
fn assess_tolerates_malformed_answers() {
    let dir = tempfile::tempdir().unwrap();
    let verdict = json_stdout(
        riskwiz(&dir)
            .args(["--output", "json", "assess", "vibration", "--answers"])
            .arg(fixture("malformed.json")),
    );

    assert_eq!(verdict["overall_level"], "low");
    assert_eq!(verdict["findings"][0]["topic"], "Trillingen");
    assert!(!verdict["data_gaps"].as_array().unwrap().is_empty());
}

#[test]
fn assess_reads_non_text_values_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let output = riskwiz(&dir)
        .args(["--output", "json", "assess", "vibration", "--answers"])
        .arg(fixture("non_text_values.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed answer is ignored"))
        .stderr(predicate::str::contains("vib-complaints"))
        .get_output()
        .stdout
        .clone();
    let verdict: serde_json::Value = serde_json::from_slice(&output).unwrap();

    // long duration with complaints unknown
    assert_eq!(verdict["overall_level"], "medium");
    assert_eq!(verdict["findings"][0]["topic"], "Hand-armtrillingen");
    let gaps = verdict["data_gaps"].as_array().unwrap();
    assert!(gaps.iter().any(|g| g == "Onbekend of er gezondheidsklachten zijn"));
    assert!(gaps.iter().any(|g| g == "Bestaande maatregelen zijn niet ingevuld"));
}

#[test]
fn assess_theme_without_engine_fails() {
    let dir = tempfile::tempdir().unwrap();
    riskwiz(&dir)
        .args(["assess", "climate", "--answers"])
        .arg(fixture("empty.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No risk engine configured for theme climate"));
}

#[test]
fn assess_unknown_theme_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    riskwiz(&dir)
        .args(["assess", "noise", "--answers"])
        .arg(fixture("empty.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("noise"));
}

#[test]
fn assess_without_theme_or_default_fails() {
    let dir = tempfile::tempdir().unwrap();
    riskwiz(&dir)
        .args(["assess", "--answers"])
        .arg(fixture("empty.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_theme"));
}

#[test]
fn assess_saves_payload() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out").join("payload.json");

    riskwiz(&dir)
        .args(["assess", "vibration", "--answers"])
        .arg(fixture("vibration_hav_long.json"))
        .arg("--save")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved payload"));

    let payload: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(payload["theme"], "vibration");
    assert_eq!(payload["answers"]["vib-duration"], "long");
    assert_eq!(payload["verdict"]["overall_level"], "high");
}

#[test]
fn config_supplies_default_theme_output_and_save_dir() {
    let dir = tempfile::tempdir().unwrap();
    let save_dir = dir.path().join("investigations");
    std::fs::write(
        dir.path().join("config.toml"),
        format!(
            "default_theme = \"vibration\"\noutput = \"json\"\nsave_dir = {:?}\n",
            save_dir.to_str().unwrap()
        ),
    )
    .unwrap();

    let verdict = json_stdout(
        riskwiz(&dir)
            .args(["assess", "--answers"])
            .arg(fixture("empty.json"))
            .args(["--save", "empty.json"]),
    );
    assert_eq!(verdict["overall_level"], "low");
    assert!(save_dir.join("empty.json").exists());
}

#[test]
fn config_command_shows_path() {
    let dir = tempfile::tempdir().unwrap();
    riskwiz(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn glossary_explains_terms() {
    let dir = tempfile::tempdir().unwrap();
    let rows = json_stdout(riskwiz(&dir).args(["--output", "json", "glossary", "vibration-limits"]));
    assert_eq!(rows[0]["term"], "vibration-limits");
    assert!(rows[0]["meaning"]
        .as_str()
        .unwrap()
        .starts_with("Arbobesluit art. 6.11b"));

    riskwiz(&dir)
        .args(["glossary", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown term: nope"));
}
