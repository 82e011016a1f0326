mod support_single;

use std::fs;
use std::process::Output;

use serde_json::Value;
use tempfile::tempdir;

use support_single::{refused_origin, run_cacheprobe, spawn_http_server};

fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

#[test]
fn e2e_headless_default_dashboard() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_cacheprobe(dir.path(), ["--no-ui", "--base-url", url.as_str()])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let lines = stdout_lines(&output);
    let expected = [
        "/api/cache/hit",
        "/api/no-cache/hit",
        "/api/no-cache/posts",
        "/api/cache/posts",
        "/api/cache/hit",
        "/api/cache/hit",
    ];
    if lines.len() != expected.len() {
        return Err(format!("Expected 6 lines.\n{}", describe(&output)));
    }
    for (line, path) in lines.iter().zip(expected) {
        if !line.starts_with("GET") || !line.contains(path) {
            return Err(format!("Expected GET {} in line: {}", path, line));
        }
        if !line.contains("s ") || !line.trim_end().ends_with("200") {
            return Err(format!("Expected duration and status in line: {}", line));
        }
    }
    Ok(())
}

#[test]
fn e2e_headless_json_adhoc_request() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_cacheprobe(
        dir.path(),
        [
            "--no-ui",
            "--output-format",
            "json",
            "--base-url",
            url.as_str(),
            "-X",
            "post",
            "-u",
            "/api/user-update",
            "-H",
            "Content-Type: application/json",
            "-d",
            r#"{"id": 1}"#,
        ],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let value: Value = serde_json::from_slice(&output.stdout)
        .map_err(|err| format!("invalid JSON output: {}\n{}", err, describe(&output)))?;
    let records = value
        .as_array()
        .ok_or_else(|| "Expected a JSON array".to_owned())?;
    let [record] = records.as_slice() else {
        return Err(format!("Expected one record, got {}", records.len()));
    };
    if record.get("method") != Some(&Value::from("POST"))
        || record.get("state") != Some(&Value::from("completed"))
        || record.get("status") != Some(&Value::from(200))
    {
        return Err(format!("Unexpected record: {}", record));
    }
    let duration = record
        .get("duration_seconds")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let decimals = duration.split_once('.').map_or(0, |(_, frac)| frac.len());
    if decimals != 4 {
        return Err(format!("Expected 4 decimals, got {}", duration));
    }
    let echoed = record
        .get("payload")
        .and_then(|payload| payload.get("path"))
        .and_then(Value::as_str);
    if echoed != Some("/api/user-update") {
        return Err(format!("Unexpected payload: {}", record));
    }
    Ok(())
}

#[test]
fn e2e_config_toml_replaces_presets() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = format!(
        r#"base_url = "{}"
no_ui = true

[[requests]]
method = "get"
url = "/api/cache/posts"

[[requests]]
method = "post"
url = "/api/login"
body = '{{"user": "demo"}}'
[requests.headers]
Content-Type = "application/json"
"#,
        url
    );
    fs::write(dir.path().join("cacheprobe.toml"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_cacheprobe(dir.path(), Vec::<String>::new())?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let lines = stdout_lines(&output);
    let matches = lines.len() == 2
        && lines.first().is_some_and(|line| line.contains("/api/cache/posts"))
        && lines
            .get(1)
            .is_some_and(|line| line.starts_with("POST") && line.contains("/api/login"));
    if !matches {
        return Err(format!("Unexpected report.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_fail_on_error_against_refused_origin() -> Result<(), String> {
    let origin = refused_origin()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let lenient = run_cacheprobe(
        dir.path(),
        ["--no-ui", "--base-url", origin.as_str(), "-u", "/api/cache/hit"],
    )?;
    if !lenient.status.success() {
        return Err(describe(&lenient));
    }
    if !String::from_utf8_lossy(&lenient.stdout).contains("failed:") {
        return Err(format!("Expected a failed line.\n{}", describe(&lenient)));
    }

    let strict = run_cacheprobe(
        dir.path(),
        [
            "--no-ui",
            "--fail-on-error",
            "--base-url",
            origin.as_str(),
            "-u",
            "/api/cache/hit",
        ],
    )?;
    if strict.status.success() {
        return Err(format!("Expected failure exit.\n{}", describe(&strict)));
    }
    Ok(())
}

#[test]
fn e2e_rejects_relative_base_url() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_cacheprobe(dir.path(), ["--no-ui", "--base-url", "/api"])?;
    if output.status.success() {
        return Err(format!("Expected failure exit.\n{}", describe(&output)));
    }
    Ok(())
}
