//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Fresh data directory for one test.
fn data_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("studymate_cli_{}_{test}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_studymate_with(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_studymate");
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .env("STUDYMATE_DATA_DIR", dir)
        .env_remove("STUDYMATE_RECORD")
        .env_remove("STUDYMATE_REPLAY")
        .env_remove("STUDYMATE_CONFIG")
        .env("STUDYMATE_LOG", "off");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run studymate binary")
}

fn run_studymate(dir: &Path, args: &[&str]) -> Output {
    run_studymate_with(dir, args, &[])
}

fn run_replaying(dir: &Path, args: &[&str], cassette: &str) -> Output {
    run_studymate_with(dir, args, &[("STUDYMATE_REPLAY", cassette)])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Writes a cassette into `dir` and returns its path as a string.
fn cassette(dir: &Path, yaml: &str) -> String {
    let path = dir.join("session.cassette.yaml");
    std::fs::write(&path, yaml).unwrap();
    path.display().to_string()
}

/// Adds a task and returns the id printed by `todo add`.
fn add_task(dir: &Path, text: &str, priority: &str) -> String {
    let output = run_studymate(dir, &["todo", "add", text, "--priority", priority]);
    assert!(output.status.success());
    stdout(&output)
        .trim()
        .strip_prefix("Added ")
        .expect("add should print the new id")
        .to_string()
}

#[test]
fn added_tasks_persist_between_runs() {
    let dir = data_dir("persist");
    add_task(&dir, "Read chapter 4", "high");

    let output = run_studymate(&dir, &["todo", "list"]);
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("Read chapter 4"));
    assert!(out.contains("Progress: 0% (0 of 1 done)"));
    assert!(dir.join("tasks_v2").exists());
}

#[test]
fn toggling_done_updates_progress_and_filter() {
    let dir = data_dir("toggle");
    let essay = add_task(&dir, "Essay outline", "medium");
    add_task(&dir, "Flashcards for bio", "low");

    let output = run_studymate(&dir, &["todo", "done", &essay]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("done"));

    let listed = stdout(&run_studymate(&dir, &["todo", "list"]));
    assert!(listed.contains("Progress: 50% (1 of 2 done)"));
    assert!(listed.contains("[x]"));

    assert!(run_studymate(&dir, &["todo", "filter", "active"]).status.success());
    let active = stdout(&run_studymate(&dir, &["todo", "list"]));
    assert!(!active.contains("Essay outline"));
    assert!(active.contains("Flashcards for bio"));
}

#[test]
fn priority_sort_puts_high_first_and_keeps_ties_in_order() {
    let dir = data_dir("sort");
    add_task(&dir, "A", "low");
    add_task(&dir, "B", "high");
    add_task(&dir, "C", "high");
    add_task(&dir, "D", "medium");

    assert!(run_studymate(&dir, &["todo", "sort", "priority"]).status.success());
    let listed = stdout(&run_studymate(&dir, &["todo", "list"]));

    let order: Vec<&str> = listed
        .lines()
        .filter(|line| line.starts_with('['))
        .filter_map(|line| line.split_whitespace().last())
        .collect();
    assert_eq!(order, ["B", "C", "D", "A"]);
}

#[test]
fn blank_task_is_not_added() {
    let dir = data_dir("blank");
    let output = run_studymate(&dir, &["todo", "add", "   "]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Nothing added"));
    assert!(stdout(&run_studymate(&dir, &["todo", "list"])).contains("No tasks to show."));
}

#[test]
fn edit_and_delete_by_id() {
    let dir = data_dir("edit");
    let id = add_task(&dir, "Lab report", "low");

    let edit: &[&str] = &["todo", "edit", &id, "--text", "Lab v2", "-p", "high"];
    assert!(run_studymate(&dir, edit).status.success());
    let listed = stdout(&run_studymate(&dir, &["todo", "list"]));
    assert!(listed.contains("Lab v2"));
    assert!(listed.contains("high"));

    assert!(run_studymate(&dir, &["todo", "delete", &id]).status.success());
    assert!(!stdout(&run_studymate(&dir, &["todo", "list"])).contains("Lab"));
}

#[test]
fn unknown_task_id_fails() {
    let dir = data_dir("unknown_id");
    let output = run_studymate(&dir, &["todo", "done", "zzzz"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no task with id"));
}

#[test]
fn greeting_uses_saved_name() {
    let dir = data_dir("name");
    let output = run_studymate(&dir, &["todo", "name", "Ada"]);
    assert!(stdout(&output).contains("Hello, Ada"));
    assert!(stdout(&run_studymate(&dir, &["todo", "list"])).starts_with("Hello, Ada"));
}

#[test]
fn replayed_ids_are_used_for_new_tasks() {
    let dir = data_dir("replay_id");
    let path = cassette(
        &dir,
        r"
name: ids
recorded_at: 2026-03-01T08:00:00Z
interactions:
  - seq: 0
    port: id_gen
    method: generate_id
    output: m7k2q1x0abcd
",
    );
    let output = run_replaying(&dir, &["todo", "add", "Revise"], &path);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Added m7k2q1x0abcd");
}

#[test]
fn recording_writes_a_cassette() {
    let dir = data_dir("record");
    let path = dir.join("recorded.yaml");
    let output = run_studymate_with(
        &dir,
        &["todo", "add", "Revise"],
        &[("STUDYMATE_RECORD", &path.display().to_string())],
    );
    assert!(output.status.success());

    let yaml = std::fs::read_to_string(&path).expect("cassette should be written");
    assert!(yaml.contains("generate_id"));
}

#[test]
fn short_break_runs_to_completion() {
    let dir = data_dir("timer");
    let output = run_studymate_with(
        &dir,
        &["timer", "--mode", "short-break", "--quiet"],
        &[("STUDYMATE_TICK_MS", "1")],
    );
    let out = stdout(&output);
    assert!(output.status.success());
    let summary = "Short Break complete. Focus sessions completed: 0. Next: Focus Session";
    assert!(out.contains("Short Break (05:00)"));
    assert!(out.contains(summary));
}

#[test]
fn timer_cycles_through_consecutive_intervals() {
    let dir = data_dir("timer_cycles");
    let output = run_studymate_with(
        &dir,
        &["timer", "--mode", "long-break", "--cycles", "2", "--quiet"],
        &[("STUDYMATE_TICK_MS", "1")],
    );
    let out = stdout(&output);
    assert!(output.status.success());
    let summary = "Focus Session complete. Focus sessions completed: 1. Next: Short Break";
    assert!(out.contains("Long Break complete"));
    assert!(out.contains(summary));
}

#[test]
fn quote_prints_replayed_quote() {
    let dir = data_dir("quote");
    let path = cassette(
        &dir,
        r#"
name: quote
recorded_at: 2026-03-01T08:00:00Z
interactions:
  - seq: 0
    port: quotes
    method: random_quote
    output: {Ok: {content: "It always seems impossible until it's done.", author: "Nelson Mandela"}}
"#,
    );
    let output = run_replaying(&dir, &["quote"], &path);
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("It always seems impossible until it's done."));
    assert!(out.contains("- Nelson Mandela"));
}

#[test]
fn quote_falls_back_when_service_fails() {
    let dir = data_dir("quote_fail");
    let path = cassette(
        &dir,
        r#"
name: quote
recorded_at: 2026-03-01T08:00:00Z
interactions:
  - seq: 0
    port: quotes
    method: random_quote
    output: {Err: "request to https://api.quotable.io/random failed: timeout"}
"#,
    );
    let output = run_replaying(&dir, &["quote"], &path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Stay motivated and keep pushing forward!"));
}

#[test]
fn quote_count_refreshes_after_the_first() {
    let dir = data_dir("quote_count");
    let path = cassette(
        &dir,
        r#"
name: quote
recorded_at: 2026-03-01T08:00:00Z
interactions:
  - seq: 0
    port: quotes
    method: random_quote
    output: {Ok: {content: "Well begun is half done.", author: "Aristotle"}}
  - seq: 1
    port: quotes
    method: random_quote
    output: {Err: "https://api.quotable.io/random returned HTTP 503"}
"#,
    );
    let output = run_replaying(&dir, &["quote", "--count", "2"], &path);
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("\"Well begun is half done.\""));
    assert!(out.contains("- Aristotle"));
    assert!(out.contains("\"Keep your spirit high!\""));
    assert!(!out.contains("Stay motivated"));
}

#[test]
fn search_lists_related_topics() {
    let dir = data_dir("search");
    let path = cassette(
        &dir,
        r#"
name: search
recorded_at: 2026-03-01T08:00:00Z
interactions:
  - seq: 0
    port: search
    method: related_topics
    input: {query: "krebs cycle"}
    output:
      Ok:
        - {text: "Citric acid cycle - series of chemical reactions", url: "https://duckduckgo.com/Citric_acid_cycle"}
        - {url: "https://duckduckgo.com/c/Metabolism"}
"#,
    );
    let output = run_replaying(&dir, &["search", "krebs", "cycle"], &path);
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.starts_with("Searching..."));
    assert!(out.contains("- Citric acid cycle - series of chemical reactions"));
    assert!(out.contains("https://duckduckgo.com/Citric_acid_cycle"));
    assert!(!out.contains("Metabolism"));
}

#[test]
fn features_lists_every_page() {
    let dir = data_dir("features");
    let out = stdout(&run_studymate(&dir, &["features"]));
    let pages = [
        "To-Do List",
        "Pomodoro Timer",
        "Motivation Quotes",
        "Flashcards",
        "Study Search",
    ];
    for feature in pages {
        assert!(out.contains(feature), "missing {feature}");
    }
}

#[test]
fn flashcards_is_a_placeholder() {
    let dir = data_dir("flashcards");
    let output = run_studymate(&dir, &["flashcards"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Coming soon..."));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = data_dir("invalid");
    let output = run_studymate(&dir, &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
