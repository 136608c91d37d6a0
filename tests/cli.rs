use assert_cmd::Command;
use tempfile::tempdir;

// Informational flags run without a TTY, so they can be driven directly.

#[test]
fn list_languages_prints_every_pool_key() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let output = Command::cargo_bin("codetype")?
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .arg("--list-languages")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    for key in ["python", "javascript", "csharp", "cpp", "go", "kotlin", "mixed"] {
        assert!(
            stdout.lines().any(|line| line.starts_with(key)),
            "missing {key} in {stdout}"
        );
    }
    Ok(())
}

#[test]
fn rejects_unsupported_time_limit() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("codetype")?
        .args(["--secs", "45"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("time limit must be one of"));
    Ok(())
}

#[test]
fn save_config_writes_selected_options() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let path = home.path().join("config.json");

    let output = Command::cargo_bin("codetype")?
        .env("HOME", home.path())
        .arg("--config")
        .arg(&path)
        .args(["-l", "kotlin", "-s", "30", "-n", "10", "--save-config"])
        .output()?;

    assert!(output.status.success());
    let saved: serde_json::Value = serde_json::from_slice(&std::fs::read(&path)?)?;
    assert_eq!(saved["language"], "kotlin");
    assert_eq!(saved["time_limit_secs"], 30);
    assert_eq!(saved["snippet_count"], 10);
    Ok(())
}

#[test]
fn saved_config_becomes_the_default() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let path = home.path().join("config.json");
    std::fs::write(&path, r#"{ "language": "swift", "time_limit_secs": 15, "snippet_count": 1 }"#)?;

    // re-saving without flags round-trips the stored defaults
    let output = Command::cargo_bin("codetype")?
        .env("HOME", home.path())
        .arg("--config")
        .arg(&path)
        .arg("--save-config")
        .output()?;

    assert!(output.status.success());
    let saved: serde_json::Value = serde_json::from_slice(&std::fs::read(&path)?)?;
    assert_eq!(saved["language"], "swift");
    assert_eq!(saved["time_limit_secs"], 15);
    assert_eq!(saved["snippet_count"], 1);
    Ok(())
}

#[test]
fn refuses_to_start_without_tty() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let output = Command::cargo_bin("codetype")?
        .env("HOME", home.path())
        .write_stdin("")
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("stdin must be a tty"));
    Ok(())
}
