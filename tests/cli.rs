//! Runs the command-line binary the way a user would.

use std::process::Command;

use serde_json::Value;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_eight-puzzle"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch eight-puzzle")
}

#[test]
fn default_puzzle_as_json() {
    let output = run(&["--json", "--verify"]);
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let runs = report["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0]["heuristic"], "manhattan");
    assert_eq!(runs[1]["heuristic"], "misplaced_tiles");

    for run in runs {
        assert_eq!(run["solved"], true);
        assert_eq!(run["moves"], 2);
        assert_eq!(run["stats"]["expanded"], 2);
        assert_eq!(run["path"].as_array().unwrap().len(), 3);
        assert_eq!(run["path"][1]["mv"], "Right");
    }
    assert_eq!(report["goal"], serde_json::json!([1, 2, 3, 4, 5, 6, 7, 8, 0]));
}

#[test]
fn text_output_lists_moves() {
    let output = run(&["--heuristic", "misplaced", "--start", "1,2,3,4,5,6,7,0,8"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Solution found using Misplaced Tiles heuristic!"));
    assert!(stdout.contains("Solution length: 1 moves"));
    assert!(stdout.contains("Move 1: Right"));
    assert!(stdout.contains("Goal reached!"));
    assert!(!stdout.contains("Heuristic Comparison"));
}

#[test]
fn malformed_board_is_rejected() {
    let output = run(&["--start", "1 2 3 4 5 6 7 8 8"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid start board"));
    assert!(stderr.contains("tile 8 appears more than once"));
}

#[test]
fn seeded_random_start_is_solved() {
    let output = run(&["--random", "--seed", "42", "--json", "--heuristic", "manhattan"]);
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["runs"][0]["solved"], true);
}
