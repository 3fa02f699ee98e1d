//! Integration tests for the hanseg CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn hanseg() -> Command {
    let mut cmd = Command::cargo_bin("hanseg").unwrap();
    cmd.env_remove("HANSEG_BACKEND");
    cmd
}

#[test]
fn test_split_korean_text() {
    hanseg()
        .args(["split", "-q", "-b", "punct", "-i"])
        .arg(fixture_path("korean-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("오늘은 날씨가 정말 좋았다.\n"))
        .stdout(predicate::str::contains("그래서 친구와 공원에 갔어요!\n"))
        .stdout(predicate::str::contains("거기서 무엇을 했을까?\n"))
        .stdout(predicate::str::contains("\"내일 또 오자.\" 라고 약속했다."));
}

#[test]
fn test_auto_backend_falls_back() {
    hanseg()
        .args(["split", "-q", "-i"])
        .arg(fixture_path("korean-notice.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("회의는 오후 세 시에 시작합니다.\n"))
        .stdout(predicate::str::contains("자료는 미리 읽어 주세요.\n"));
}

#[test]
fn test_json_output() {
    hanseg()
        .args(["split", "-q", "-b", "punct", "-f", "json", "-i"])
        .arg(fixture_path("korean-notice.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"offset\""))
        .stdout(predicate::str::contains("\"text\": \"자료는 미리 읽어 주세요.\""));
}

#[test]
fn test_markdown_output() {
    hanseg()
        .args(["split", "-q", "-b", "punct", "-f", "markdown", "-i"])
        .arg(fixture_path("korean-notice.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 회의는 오후 세 시에 시작합니다."))
        .stdout(predicate::str::contains("*Total sentences: 2*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("sentences.txt");

    hanseg()
        .args(["split", "-q", "-b", "punct", "-i"])
        .arg(fixture_path("korean-notice.txt"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        written,
        "회의는 오후 세 시에 시작합니다.\n자료는 미리 읽어 주세요.\n"
    );
}

#[test]
fn test_glob_pattern_with_several_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "첫 파일이다. 끝.").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "둘째 파일이다.").unwrap();
    let pattern = temp_dir.path().join("*.txt");

    hanseg()
        .args(["split", "-q", "-b", "punct", "-f", "markdown", "-i"])
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("## "))
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("둘째 파일이다."))
        .stdout(predicate::str::contains("*Total sentences: 3*"));
}

#[test]
fn test_nonexistent_file() {
    hanseg()
        .args(["split", "-q", "-i", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_stdin_input() {
    hanseg()
        .args(["split", "-q", "-b", "punct", "-i", "-"])
        .write_stdin("정말요? 네 맞아요.")
        .assert()
        .success()
        .stdout("정말요?\n네 맞아요.\n");
}

#[test]
fn test_ignore_flag() {
    hanseg()
        .args(["split", "-q", "-b", "punct", "--ignore", "Mr. 김", "-i", "-"])
        .write_stdin("오늘 Mr. 김을 만났다. 반가웠다.")
        .assert()
        .success()
        .stdout("오늘 Mr. 김을 만났다.\n반가웠다.\n");
}

#[test]
fn test_fast_backend() {
    hanseg()
        .args(["split", "-q", "-b", "fast", "-i", "-"])
        .write_stdin("오늘 밥을 먹었다 그리고 잤다")
        .assert()
        .success()
        .stdout("오늘 밥을 먹었다\n그리고 잤다\n");
}

#[test]
fn test_unknown_backend() {
    hanseg()
        .args(["split", "-b", "kkma", "-i", "-"])
        .write_stdin("가.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("kkma"));
}

#[test]
fn test_unregistered_backend_is_unavailable() {
    hanseg()
        .args(["split", "-q", "-b", "mecab", "-i", "-"])
        .write_stdin("가.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mecab"));
}

#[test]
fn test_chunk_command() {
    hanseg()
        .args(["chunk", "-q", "-b", "punct", "-m", "9", "-f", "json", "-i", "-"])
        .write_stdin("가나다. 라마바. 사아자. 차카타.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"가나다. 라마바.\""))
        .stdout(predicate::str::contains("\"offset\": 10"));
}

#[test]
fn test_chunk_rejects_zero_length() {
    hanseg()
        .args(["chunk", "-q", "-b", "punct", "-m", "0", "-i", "-"])
        .write_stdin("가.")
        .assert()
        .failure();
}

#[test]
fn test_help_command() {
    hanseg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Korean sentence splitting"));
}

#[test]
fn test_list_backends() {
    hanseg()
        .args(["list", "backends"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mecab"))
        .stdout(predicate::str::contains("punct"))
        .stdout(predicate::str::contains("fast"));
}

#[test]
fn test_list_formats() {
    hanseg()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hanseg.toml");

    hanseg()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("hanseg validate -c"));

    hanseg()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    hanseg()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[output]\ndefault_format = \"yaml\"\n").unwrap();

    hanseg()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_config_selects_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hanseg.toml");
    fs::write(
        &config_path,
        "[splitting]\nbackend = \"punct\"\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    hanseg()
        .args(["split", "-q", "-i", "-", "-c"])
        .arg(&config_path)
        .write_stdin("하나. 둘.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"하나.\""));
}

#[test]
fn test_no_strip_keeps_whitespace() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.json");

    hanseg()
        .args(["split", "-q", "-b", "punct", "--no-strip", "-f", "json", "-i", "-", "-o"])
        .arg(&output_path)
        .write_stdin("첫째.  둘째.")
        .assert()
        .success();

    let written = fs::read_to_string(&output_path).unwrap();
    let segments: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(segments.len(), 2);
    let joined: String = segments
        .iter()
        .map(|s| s["text"].as_str().unwrap())
        .collect();
    assert_eq!(joined, "첫째.  둘째.");
}
