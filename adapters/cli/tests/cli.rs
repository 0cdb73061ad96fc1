use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use tempfile::TempDir;

fn mopsolver() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mopsolver"));
    let _ = command.env_remove("RUST_LOG");
    command
}

fn write_maze(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("maze.txt");
    fs::write(&path, contents).expect("write maze file");
    path
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = mopsolver()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn mopsolver");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes())
        .expect("write maze to stdin");
    child.wait_with_output().expect("wait for mopsolver")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn steps_flag_reports_shortest_path_length() {
    let dir = TempDir::new().expect("temporary directory");
    let maze = write_maze(&dir, "000\n000\n000\n");

    let output = mopsolver()
        .arg("-s")
        .arg("-i")
        .arg(&maze)
        .output()
        .expect("run mopsolver");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Solution in 5 steps.\n");
}

#[test]
fn reads_maze_from_stdin_by_default() {
    let output = run_with_stdin(&["-s"], "0 1\n1 0\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No solution.\n");
}

#[test]
fn display_and_path_flags_draw_the_maze() {
    let output = run_with_stdin(&["-dp"], "01\n00\n");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        concat!(
            "|-----|\n  . # |\n| . .  \n|-----|\n",
            "|-----|\n  + # |\n| + +  \n|-----|\n",
        )
    );
}

#[test]
fn output_file_is_appended_to() {
    let dir = TempDir::new().expect("temporary directory");
    let maze = write_maze(&dir, "00\n10\n");
    let report = dir.path().join("report.txt");

    for _ in 0..2 {
        let output = mopsolver()
            .arg("-s")
            .arg("-i")
            .arg(&maze)
            .arg("-o")
            .arg(&report)
            .output()
            .expect("run mopsolver");
        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    let contents = fs::read_to_string(&report).expect("read report");
    assert_eq!(contents, "Solution in 3 steps.\nSolution in 3 steps.\n");
}

#[test]
fn glyph_configuration_changes_the_drawing() {
    let dir = TempDir::new().expect("temporary directory");
    let glyphs = dir.path().join("glyphs.toml");
    fs::write(&glyphs, "open = \"o\"\npath = \"*\"\n").expect("write glyphs");

    let output = run_with_stdin(
        &["-p", "--glyphs", glyphs.to_str().expect("utf-8 path")],
        "00\n",
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "|-----|\n  * *  \n|-----|\n");
}

#[test]
fn any_non_open_character_is_a_wall() {
    let output = run_with_stdin(&["-sd"], "0#\n00\n");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "|-----|\n  . # |\n| . .  \n|-----|\nSolution in 3 steps.\n"
    );
}

#[test]
fn malformed_maze_fails_with_message() {
    let output = run_with_stdin(&["-s"], "00\n0\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse maze"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_fails() {
    let output = mopsolver()
        .args(["-s", "-i"])
        .arg(Path::new("no/such/maze.txt"))
        .output()
        .expect("run mopsolver");

    assert!(!output.status.success());
}

#[test]
fn help_flag_prints_usage() {
    let output = mopsolver().arg("-h").output().expect("run mopsolver");

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("Usage: mopsolver"));
    assert!(help.contains("--input <INFILE>"));
}

#[test]
fn unknown_flag_is_rejected() {
    let output = mopsolver().arg("-x").output().expect("run mopsolver");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
