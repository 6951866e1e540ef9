use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn bin() -> Command {
    let bin_path = std::env::var("CARGO_BIN_EXE_sourceshare")
        .unwrap_or_else(|_| "target/debug/sourceshare".to_string());
    let mut cmd = Command::new(bin_path);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_in(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = bin()
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sourceshare");

    {
        let mut pipe = child.stdin.take().expect("Child stdin should be available");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for sourceshare")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn share_then_open_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".sourceshare.toml"),
        "base_url = \"https://sourceshare.dev/editor\"\n",
    )
    .expect("write config");
    let source = "fn main() {\n    println!(\"héllo 👋\");\n}\n";
    fs::write(dir.path().join("hello.rs"), source).expect("write source");

    let shared = run_in(dir.path(), &["share", "hello.rs", "--json"], None);
    assert!(shared.status.success(), "share failed: {:?}", shared);
    let json: Value = serde_json::from_str(&stdout(&shared)).expect("share json");
    assert_eq!(json["filename"], "hello.rs");
    assert_eq!(json["language"], "rust");
    let url = json["url"].as_str().expect("url string");
    assert!(url.starts_with("https://sourceshare.dev/editor?code="));

    let opened = run_in(dir.path(), &["open", url], None);
    assert!(opened.status.success(), "open failed: {:?}", opened);
    assert_eq!(stdout(&opened), source);
}

#[test]
fn share_then_open_keeps_content_without_trailing_newline() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("abc.py"), "abc").expect("write source");

    let shared = run_in(
        dir.path(),
        &["share", "abc.py", "--base-url", "https://x.dev/editor"],
        None,
    );
    assert!(shared.status.success(), "share failed: {:?}", shared);
    assert_eq!(stdout(&shared), "https://x.dev/editor?code=YWJj\n");

    let opened = run_in(dir.path(), &["open", "https://x.dev/editor?code=YWJj"], None);
    assert!(opened.status.success(), "open failed: {:?}", opened);
    assert_eq!(stdout(&opened), "abc");
}

#[test]
fn share_unknown_language_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("snippet.cob"), "DISPLAY 'HI'.").expect("write source");

    let shared = run_in(
        dir.path(),
        &["share", "snippet.cob", "--language", "cobol", "--json"],
        None,
    );
    assert!(shared.status.success(), "share failed: {:?}", shared);
    let json: Value = serde_json::from_str(&stdout(&shared)).expect("share json");
    assert_eq!(json["language"], "typescript");
    assert_eq!(json["filename"], "snippet.ts");
}

#[test]
fn share_ignores_link_already_in_base_url() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".sourceshare.toml"),
        "base_url = \"https://sourceshare.dev/editor?code=%25%25%25#top\"\n",
    )
    .expect("write config");
    fs::write(dir.path().join("abc.js"), "abc").expect("write source");

    let shared = run_in(dir.path(), &["share", "abc.js", "--json"], None);
    assert!(shared.status.success(), "share failed: {:?}", shared);
    let json: Value = serde_json::from_str(&stdout(&shared)).expect("share json");
    assert_eq!(json["url"], "https://sourceshare.dev/editor?code=YWJj");

    let stderr = String::from_utf8_lossy(&shared.stderr);
    assert!(!stderr.contains("Invalid Link"), "unexpected stderr: {}", stderr);
}

#[test]
fn open_download_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out");
    let url = "http://localhost:8080/editor?code=aGVsbG8%3D";

    let opened = run_in(
        dir.path(),
        &["open", url, "--download", "--download-dir", out.to_str().expect("utf-8")],
        None,
    );
    assert!(opened.status.success(), "open failed: {:?}", opened);
    let written = fs::read_to_string(out.join("fibonacci.ts")).expect("downloaded file");
    assert_eq!(written, "hello");
}

#[test]
fn open_broken_link_prints_default_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opened = run_in(
        dir.path(),
        &["open", "http://localhost:8080/editor?code=%25%25%25"],
        None,
    );
    assert!(opened.status.success());
    assert!(stdout(&opened).contains("function fibonacci"));
}

#[test]
fn encode_decode_via_stdin() {
    let dir = tempfile::tempdir().expect("tempdir");

    let encoded = run_in(dir.path(), &["encode"], Some("hello"));
    assert!(encoded.status.success());
    assert_eq!(stdout(&encoded), "aGVsbG8%3D\n");

    let decoded = run_in(dir.path(), &["decode"], Some("aGVsbG8%3D\n"));
    assert!(decoded.status.success());
    assert_eq!(stdout(&decoded), "hello");

    let broken = run_in(dir.path(), &["decode"], Some("%25%25%25"));
    assert!(!broken.status.success());
}

#[test]
fn languages_lists_all() {
    let dir = tempfile::tempdir().expect("tempdir");
    let listed = run_in(dir.path(), &["languages"], None);
    assert!(listed.status.success());
    let text = stdout(&listed);
    assert_eq!(text.lines().count(), 12);
    assert!(text.contains("cpp"));
}
