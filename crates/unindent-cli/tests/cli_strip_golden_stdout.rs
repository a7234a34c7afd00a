use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn fixture_path(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file)
}

fn unindent_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unindent");
    cmd.env_remove("UNINDENT_LOG")
        .env_remove("UNINDENT_KEEP_SHORT_BLANK_LINES");
    cmd
}

#[test]
fn strip_file_stdout_golden() {
    let input = fixture_path("indented.rs.txt");

    let mut cmd = unindent_cmd();
    cmd.args(["strip", input.to_str().unwrap()]);

    // No trailing newline is added: output ends exactly where the input did.
    cmd.assert().success().stdout(
        "\nfn main() {\n    println!(\"hi\");\n\n    if ready {\n go();\n    }\n}\n",
    );
}

#[test]
fn strip_preserves_crlf() {
    let input = fixture_path("crlf.txt");

    let mut cmd = unindent_cmd();
    cmd.args(["strip", input.to_str().unwrap()]);

    cmd.assert().success().stdout("abc\r\n  def\r\nghi\r\n");
}

#[test]
fn strip_reads_stdin_when_input_is_omitted_or_dash() {
    let mut cmd = unindent_cmd();
    cmd.arg("strip").write_stdin("\tabc\n\t\tabc");
    cmd.assert().success().stdout("abc\n\tabc");

    let mut cmd = unindent_cmd();
    cmd.args(["strip", "-"]).write_stdin("  abc");
    cmd.assert().success().stdout("abc");
}

#[test]
fn strip_empty_input_prints_nothing() {
    let mut cmd = unindent_cmd();
    cmd.arg("strip").write_stdin("");
    cmd.assert().success().stdout("");
}

#[test]
fn strip_short_blank_line_policy_flag_and_env() {
    let input = "    a\n  \n    b";

    let mut cmd = unindent_cmd();
    cmd.arg("strip").write_stdin(input);
    cmd.assert().success().stdout("a\n\nb");

    let mut cmd = unindent_cmd();
    cmd.args(["strip", "--keep-short-blank-lines"]).write_stdin(input);
    cmd.assert().success().stdout("a\n  \nb");

    let mut cmd = unindent_cmd();
    cmd.arg("strip")
        .env("UNINDENT_KEEP_SHORT_BLANK_LINES", "true")
        .write_stdin(input);
    cmd.assert().success().stdout("a\n  \nb");
}

#[test]
fn strip_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");

    let mut cmd = unindent_cmd();
    cmd.args(["strip", "-o", out.to_str().unwrap()])
        .write_stdin("  x\n    y\n");
    cmd.assert().success().stdout("");

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "x\n  y\n");
}

#[test]
fn strip_report_json_goes_to_stderr() {
    let input = fixture_path("crlf.txt");

    let mut cmd = unindent_cmd();
    cmd.args(["strip", input.to_str().unwrap(), "--report-json", "--min"]);

    cmd.assert()
        .success()
        .stdout("abc\r\n  def\r\nghi\r\n")
        .stderr(
            r#"{"v":1,"lines":3,"content_lines":3,"blank_lines":0,"min_indent":2,"newline":"crlf","input_chars":23,"output_chars":17,"changed":true}
"#,
        );
}

#[test]
fn strip_min_requires_report_json() {
    let mut cmd = unindent_cmd();
    cmd.args(["strip", "--min"]).write_stdin("  a");
    cmd.assert().failure().code(2);
}

#[test]
fn strip_missing_file_exits_1() {
    let mut cmd = unindent_cmd();
    cmd.args(["strip", "definitely/not/here.txt"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read definitely/not/here.txt"));
}
