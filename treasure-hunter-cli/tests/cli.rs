use std::path::PathBuf;
use std::process::{Command, Output};

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treasure-hunter"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn temp_file(tag: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "treasure-hunter-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

fn scripted(script: &str, extra: &[&str]) -> Output {
    let path = temp_file("script", script);
    let output = binary()
        .args(["--seed", "42", "--no-color", "--script"])
        .arg(&path)
        .args(extra)
        .output()
        .unwrap();
    let _ = std::fs::remove_file(path);
    output
}

#[test]
fn scripted_run_greets_and_says_goodbye() {
    let output = scripted("e\nx\n", &["--name", "Lara", "--difficulty", "n"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to TREASURE HUNTER!"));
    assert!(stdout.contains("The terrain is"));
    assert!(stdout.contains("Fare thee well, lara!"));
}

#[test]
fn scripted_prompts_cover_name_and_difficulty() {
    let output = scripted("Indy\nh\nx\n", &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("What's your name, Hunter? Indy"));
    assert!(stdout.contains("indy has 20 gold"));
}

#[test]
fn same_seed_same_transcript() {
    let script = "b\nwater\n2\nl\nh\nd\nm\nx\n";
    let args = ["--name", "Ada", "--difficulty", "e"];
    let first = scripted(script, &args);
    let second = scripted(script, &args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_config_is_rejected() {
    let config = temp_file("config", r#"{"kit_capacity": 0}"#);
    let output = binary()
        .args(["--seed", "1", "--no-color", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    let _ = std::fs::remove_file(config);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading config"));
}

#[test]
fn autoplay_emits_a_json_report() {
    let output = binary()
        .args([
            "--seed",
            "7",
            "--no-color",
            "--autoplay",
            "2",
            "--strategies",
            "cautious,digger",
            "--report",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let games = report["games"].as_array().unwrap();
    assert_eq!(games.len(), 4);
    assert_eq!(games[0]["seed"], 7);
    assert_eq!(games[1]["seed"], 8);
    assert_eq!(report["summaries"][0]["strategy"], "Cautious");
    assert_eq!(report["summaries"][1]["strategy"], "Digger");
}
