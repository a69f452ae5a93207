use assert_cmd::Command;

fn js_analyze(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("js-analyze").unwrap();
    cmd.env("JS_ANALYZE_CONFIG_DIR", config_dir)
        .env_remove("OLLAMA_HOST")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_flags_prints_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = js_analyze(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("--set-model"));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_set_model_writes_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = js_analyze(dir.path())
        .args(["--set-model", "llama3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Default model saved: llama3"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("config.json")).unwrap(),
        r#"{"model":"llama3"}"#
    );
}

#[test]
fn test_missing_config_exits_before_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let output = js_analyze(dir.path())
        .args(["-u", "http://127.0.0.1:1/app.js"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Model not configured"));
    assert!(stdout.contains("--set-model"));
    assert!(!stdout.contains("Failed fetching"));
}

#[test]
fn test_fetch_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    js_analyze(dir.path())
        .args(["--set-model", "llama3"])
        .assert()
        .success();

    let output = js_analyze(dir.path())
        .args(["-u", "http://127.0.0.1:1/app.js"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Failed fetching http://127.0.0.1:1/app.js"));
}

#[test]
fn test_missing_list_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    js_analyze(dir.path())
        .args(["--set-model", "llama3"])
        .assert()
        .success();

    let output = js_analyze(dir.path())
        .args(["-o", "does-not-exist.txt"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stdout_of(&output).contains("Failed to open URL list"));
}

#[test]
fn test_input_flags_are_exclusive() {
    let dir = tempfile::tempdir().unwrap();
    js_analyze(dir.path())
        .args(["-u", "http://a.example/x.js", "-f", "x.js"])
        .assert()
        .failure();
}
