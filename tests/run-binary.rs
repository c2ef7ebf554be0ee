use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_lockout() {
    let output = r"Solving puzzles/lockout.csv...
Puzzle #1
+---+---+---+---+---+
|   |   |   | O |   |
+---+---+---+---+---+
|   | G |   |   |   |
+---+---+---+---+---+
|   |   | # |   |   |
+---+---+---+---+---+
|   |   |   | P |   |
+---+---+---+---+---+
|   | Y |   |   | R |
+---+---+---+---+---+
Solution:
    red left
    yellow up
    purple up
    green right
    red up
Actions: 5

";

    Command::main_binary()
        .unwrap()
        .arg("--puzzle")
        .arg("1")
        .arg("puzzles/lockout.csv")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_sliding_optimized() {
    let output = r"Solving puzzles/sliding.csv...
Puzzle #2
+---+---+---+---+---+
| D | D |   | A | A |
+---+---+---+---+---+
| E | E | C | A | A |
+---+---+---+---+---+
| H | J |   | G | F |
+---+---+---+---+---+
| H | J | B | G | F |
+---+---+---+---+---+
Solution:
    B up
    D right
    B down
    C down
    D left
    A left
Actions: 6

";

    Command::main_binary()
        .unwrap()
        .arg("-s")
        .arg("-o")
        .arg("-p")
        .arg("2")
        .arg("puzzles/sliding.csv")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_tilt_boards() {
    let output = r"Solving puzzles/tilt.csv...
Puzzle #1
+---+---+---+---+---+
| L |   |   | X |   |
+---+---+---+---+---+
| X |   |   |   |   |
+---+---+---+---+---+
|   |   | O |   |   |
+---+---+---+---+---+
|   |   |   |   |   |
+---+---+---+---+---+
|   |   |   |   |   |
+---+---+---+---+---+
Solution:
    tilt right
+---+---+---+---+---+
|   |   | L | X |   |
+---+---+---+---+---+
| X |   |   |   |   |
+---+---+---+---+---+
|   |   | O |   |   |
+---+---+---+---+---+
|   |   |   |   |   |
+---+---+---+---+---+
|   |   |   |   |   |
+---+---+---+---+---+
    tilt down
+---+---+---+---+---+
|   |   |   | X |   |
+---+---+---+---+---+
| X |   |   |   |   |
+---+---+---+---+---+
|   |   | O |   |   |
+---+---+---+---+---+
|   |   |   |   |   |
+---+---+---+---+---+
|   |   |   |   |   |
+---+---+---+---+---+
Actions: 2

";

    // family guessed from the file name
    Command::main_binary()
        .unwrap()
        .arg("--boards")
        .arg("-p")
        .arg("1")
        .arg("puzzles/tilt.csv")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_whole_set() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--optimize")
        .arg("puzzles/lockout.csv")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Puzzle #").count(), 7);
    assert!(stdout.contains("Actions: 4\nOptimized from 5 actions\n"));
    assert!(stdout.contains("Actions: 15\nOptimized from 16 actions\n"));
    assert!(stdout.contains("Puzzle #7\n"));
    assert!(stdout.ends_with("No solution\n\n"));
}

#[test]
fn run_limited() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["-l", "-p", "3", "--max-states", "10", "puzzles/lockout.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Search cancelled: visited 10 unique states\n\n"));
}

#[test]
fn run_verbose() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["-v", "-p", "5", "puzzles/lockout.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(
        "Visited new depth: 0
total created / unique visited / reached duplicates:
0               1                0
"
    ));
    assert!(stdout.contains("Visited new depth: 3\n"));
    assert!(stdout.contains("States created total: 3\n"));
    assert!(stdout.contains("Max depth: 3\n"));
    assert!(stdout.contains("Actions: 3\n"));
}

#[test]
fn run_errors() {
    Command::main_binary()
        .unwrap()
        .args(&["-p", "42", "puzzles/lockout.csv"])
        .assert()
        .failure()
        .stdout("Solving puzzles/lockout.csv...\nPuzzle #42 is not in puzzles/lockout.csv\n");

    Command::main_binary()
        .unwrap()
        .args(&["--max-states", "0", "puzzles/lockout.csv"])
        .assert()
        .failure()
        .stdout("Invalid number of states: 0\n");

    // tilt rows don't parse as robots
    Command::main_binary()
        .unwrap()
        .args(&["--lockout", "puzzles/tilt.csv"])
        .assert()
        .failure();

    let output = Command::main_binary()
        .unwrap()
        .arg("puzzles/missing.csv")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Can't load puzzles/missing.csv in "));
}

#[test]
fn run_family_by_name() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["--family", "tilt", "-p", "2", "puzzles/tilt.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Solution:\n    tilt down\nActions: 1\n"));

    Command::main_binary()
        .unwrap()
        .args(&["-f", "sokoban", "puzzles/tilt.csv"])
        .assert()
        .failure()
        .stdout("Unknown name \"sokoban\"\n");
}

#[test]
fn run_bad_family_args() {
    // clap reports the conflict on stderr, nothing goes to stdout

    Command::main_binary()
        .unwrap()
        .arg("--sliding")
        .arg("--tilt")
        .arg("puzzles/tilt.csv")
        .assert()
        .failure()
        .stdout("");

    Command::main_binary()
        .unwrap()
        .args(&["--family", "sliding", "-t", "puzzles/tilt.csv"])
        .assert()
        .failure()
        .stdout("");
}
