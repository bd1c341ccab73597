//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a scratch directory so
//! the real config file is never touched.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    run_cli_with_stdin(home, args, "")
}

fn run_cli_with_stdin(home: &Path, args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_soberpath"))
        .args(args)
        .env("HOME", home)
        .env_remove("SOBERPATH_ENV")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

fn event_types(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|event| event["type"].as_str().map(str::to_string))
        .collect()
}

#[test]
fn test_goals_seed_progress() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["goals", "--json"]);
    assert_eq!(code, 0, "goals failed");
    let report = json(&stdout);
    assert_eq!(report["goals"].as_array().unwrap().len(), 4);
    assert_eq!(report["progress"]["percentage"], 25);
    assert_eq!(report["progress"]["next_milestone"]["title"], "30 Days Sober");
}

#[test]
fn test_goals_toggle_add_remove() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["goals", "--add", "Walk daily", "--toggle", "1", "--remove", "4", "--json"],
    );
    assert_eq!(code, 0, "goals failed");
    let report = json(&stdout);
    let goals = report["goals"].as_array().unwrap();
    assert_eq!(goals.len(), 4);
    assert_eq!(goals[3]["title"], "Walk daily");
    assert_eq!(report["progress"]["completed_count"], 2);
    assert_eq!(report["progress"]["percentage"], 50);

    let types: Vec<&str> = report["events"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["type"].as_str())
        .collect();
    assert_eq!(types, ["item_added", "item_toggled", "item_removed"]);
}

#[test]
fn test_goals_unknown_id_is_ignored() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli(home.path(), &["goals", "--toggle", "nope", "--json"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("no goal with id nope"));
    assert_eq!(json(&stdout)["progress"]["percentage"], 25);
}

#[test]
fn test_goals_blank_title_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["goals", "--add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_goals_add_with_details() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &[
            "goals",
            "--add",
            "Run a 5k",
            "--description",
            "Train three times a week",
            "--category",
            "health",
            "--target",
            "2025-09-01",
            "--add",
            "Call mom weekly",
            "--target",
            "60",
            "--json",
        ],
    );
    assert_eq!(code, 0, "goals failed");
    let report = json(&stdout);
    let goals = report["goals"].as_array().unwrap();
    assert_eq!(goals.len(), 6);

    let run = &goals[4];
    assert_eq!(run["title"], "Run a 5k");
    assert_eq!(run["description"], "Train three times a week");
    assert_eq!(run["category"], "health");
    assert_eq!(run["target"]["kind"], "date");
    assert_eq!(run["target"]["value"], "2025-09-01");
    assert_eq!(goals[5]["target"]["kind"], "days");
    assert_eq!(goals[5]["target"]["value"], 60);
}

#[test]
fn test_goals_category_defaults_to_personal() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["goals", "--add", "Journal nightly", "--json"]);
    assert_eq!(code, 0, "goals failed");
    assert_eq!(json(&stdout)["goals"][4]["category"], "personal");
}

#[test]
fn test_goals_rejects_bad_target() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["goals", "--add", "x", "--target", "soon"]);
    assert_ne!(code, 0);
    let (code, _, _) = run_cli(home.path(), &["goals", "--target", "30"]);
    assert_ne!(code, 0);
}

#[test]
fn test_goals_added_goal_can_be_toggled_by_title() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["goals", "--add", "Walk daily", "--toggle", "walk daily", "--remove", "Save $500", "--json"],
    );
    assert_eq!(code, 0, "goals failed");
    let report = json(&stdout);
    let goals = report["goals"].as_array().unwrap();
    assert_eq!(goals.len(), 4);
    assert_eq!(goals[3]["title"], "Walk daily");
    assert_eq!(goals[3]["completed"], true);
    assert_eq!(report["progress"]["completed_count"], 2);
}

#[test]
fn test_goals_text_shows_remaining() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["goals"]);
    assert_eq!(code, 0, "goals failed");
    assert!(stdout.contains("1/4 completed (25%), 3 to go"));
}

#[test]
fn test_habits_follow_configured_position() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["habits", "--add", "Stretch", "--add", "Drink water", "--toggle", "stretch", "--json"],
    );
    assert_eq!(code, 0, "habits failed");
    let report = json(&stdout);
    assert_eq!(report["habits"][0]["title"], "Drink water");
    assert_eq!(report["habits"][1]["completed"], true);
    assert_eq!(report["progress"]["percentage"], 50);

    run_cli(home.path(), &["config", "set", "tracker.insert_position", "back"]);
    let (_, stdout, _) = run_cli(
        home.path(),
        &["habits", "--add", "Stretch", "--add", "Drink water", "--remove", "Stretch", "--json"],
    );
    let report = json(&stdout);
    let habits = report["habits"].as_array().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0]["title"], "Drink water");
}

#[test]
fn test_habits_start_empty() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["habits"]);
    assert_eq!(code, 0, "habits failed");
    assert!(stdout.contains("No habits yet"));
}

#[test]
fn test_contacts_add_formats_phone() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["contacts", "--name", "Sam", "--phone", "555.123.4567", "--relationship", "sponsor", "--primary"],
    );
    assert_eq!(code, 0, "contacts failed");
    assert!(stdout.contains("* Sam (Sponsor) (555) 123-4567"));
}

#[test]
fn test_contacts_rejects_invalid_phone() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["contacts", "--name", "Sam", "--phone", "call me"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("phone"));
}

#[test]
fn test_reminders_confirm_requires_one() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["reminders", "--confirm"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("select at least one reminder"));

    let (code, stdout, _) = run_cli(
        home.path(),
        &["reminders", "--enable", "hydration", "--enable", "hydration", "--confirm", "--json"],
    );
    assert_eq!(code, 0, "reminders failed");
    let report = json(&stdout);
    assert_eq!(report["enabled_count"], 1);
    assert_eq!(report["reminders"].as_array().unwrap().len(), 6);
}

#[test]
fn test_checklist_category_filter() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["checklist", "--category", "morning", "--toggle", "1", "--json"],
    );
    assert_eq!(code, 0, "checklist failed");
    let report = json(&stdout);
    let sections = report["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["category"], "morning");
    assert_eq!(sections[0]["entries"].as_array().unwrap().len(), 3);
    assert_eq!(sections[0]["progress"]["percentage"], 33);
    assert_eq!(report["overall"]["completed_count"], 1);
    assert_eq!(report["overall"]["total_count"], 14);
}

#[test]
fn test_checklist_rejects_unknown_category() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["checklist", "--category", "lunch"]);
    assert_ne!(code, 0);
}

#[test]
fn test_milestones_by_days() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["milestones", "--days", "5", "--json"]);
    assert_eq!(code, 0, "milestones failed");
    let report = json(&stdout);
    assert_eq!(report["milestones"]["next"], 7);
    assert_eq!(report["milestones"]["percentage_to_next"], 71);
    assert!(report.get("stats").is_none());
}

#[test]
fn test_milestones_requires_input() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["milestones"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_get_set_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "breathing.phase_secs"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "4");

    let (code, stdout, _) = run_cli(home.path(), &["config", "set", "tap_game.session_secs", "45"]);
    assert_eq!(code, 0, "config set failed");
    assert_eq!(stdout.trim(), "ok");

    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "tap_game.session_secs"]);
    assert_eq!(stdout.trim(), "45");
    assert!(home.path().join(".config/soberpath/config.toml").exists());
}

#[test]
fn test_config_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["config", "get", "ui.dark_mode"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key: ui.dark_mode"));
}

#[test]
fn test_config_list() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert_eq!(json(&stdout)["recovery"]["milestone_days"], serde_json::json!([7, 30, 90]));
}

#[test]
fn test_breathe_one_cycle() {
    let home = tempfile::tempdir().unwrap();
    run_cli(home.path(), &["config", "set", "breathing.tick_interval_ms", "5"]);

    let (code, stdout, _) = run_cli(home.path(), &["breathe", "--cycles", "1"]);
    assert_eq!(code, 0, "breathe failed");
    let types = event_types(&stdout);
    assert_eq!(types.first().map(String::as_str), Some("session_started"));
    assert_eq!(types.iter().filter(|t| *t == "phase_changed").count(), 3);
    assert_eq!(types.last().map(String::as_str), Some("session_stopped"));
}

#[test]
fn test_tap_game_counts_stdin_lines() {
    let home = tempfile::tempdir().unwrap();
    run_cli(home.path(), &["config", "set", "tap_game.session_secs", "1"]);
    run_cli(home.path(), &["config", "set", "tap_game.tick_interval_ms", "300"]);

    let (code, stdout, _) = run_cli_with_stdin(home.path(), &["tap-game"], "\n\n\n");
    assert_eq!(code, 0, "tap-game failed");
    let finished = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|event| event["type"] == "game_finished")
        .expect("game_finished event");
    assert_eq!(finished["score"], 3);
    assert_eq!(finished["new_high_score"], true);
}
