use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult};

#[test]
fn parse_header_valid() -> AppResult<()> {
    let parsed = parse_header("Content-Type: application/json");
    match parsed {
        Ok((key, value)) => {
            if key != "Content-Type" {
                return Err(AppError::validation(format!("Unexpected key: {}", key)));
            }
            if value != "application/json" {
                return Err(AppError::validation(format!("Unexpected value: {}", value)));
            }
            Ok(())
        }
        Err(err) => Err(AppError::validation(format!(
            "Expected Ok, got Err: {}",
            err
        ))),
    }
}

#[test]
fn parse_header_invalid() -> AppResult<()> {
    if parse_header("MissingDelimiter").is_ok() {
        return Err(AppError::validation("Expected Err for invalid header"));
    }
    if parse_header(": value-without-name").is_ok() {
        return Err(AppError::validation("Expected Err for empty header name"));
    }
    Ok(())
}

#[test]
fn parse_header_keeps_colons_in_value() -> AppResult<()> {
    let (key, value) = parse_header("Referer: http://localhost:8080/dashboard")
        .map_err(|err| AppError::validation(format!("Unexpected error: {}", err)))?;
    if key != "Referer" || value != "http://localhost:8080/dashboard" {
        return Err(AppError::validation(format!(
            "Unexpected header: {}={}",
            key, value
        )));
    }
    Ok(())
}

#[test]
fn http_method_parses_case_insensitively() -> AppResult<()> {
    for (raw, expected) in [
        ("get", HttpMethod::Get),
        ("POST", HttpMethod::Post),
        (" Patch ", HttpMethod::Patch),
        ("options", HttpMethod::Options),
    ] {
        let parsed: HttpMethod = raw
            .parse()
            .map_err(|err| AppError::validation(format!("{}: {}", raw, err)))?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Expected {} for '{}', got {}",
                expected, raw, parsed
            )));
        }
    }
    if "FETCH".parse::<HttpMethod>().is_ok() {
        return Err(AppError::validation("Expected Err for unknown method"));
    }
    Ok(())
}

#[test]
fn defaults_when_no_flags() -> AppResult<()> {
    let args = parse_test_args(["cacheprobe"])?;
    if args.url.is_some() || args.method.is_some() || !args.headers.is_empty() {
        return Err(AppError::validation("Expected no ad-hoc request"));
    }
    if args.no_ui || args.fail_on_error || args.verbose || args.no_color {
        return Err(AppError::validation("Expected flags to default to false"));
    }
    if args.output_format != OutputFormat::Text {
        return Err(AppError::validation("Expected text output by default"));
    }
    Ok(())
}

#[test]
fn ad_hoc_request_flags_parse() -> AppResult<()> {
    let args = parse_test_args([
        "cacheprobe",
        "-X",
        "post",
        "-u",
        "/api/user-update",
        "-H",
        "Content-Type: application/json",
        "-d",
        r#"{"id": 1}"#,
        "--no-ui",
        "--output-format",
        "json",
    ])?;
    if args.method != Some(HttpMethod::Post) {
        return Err(AppError::validation("Expected POST method"));
    }
    if args.url.as_deref() != Some("/api/user-update") {
        return Err(AppError::validation("Unexpected url"));
    }
    if args.headers
        != vec![(
            "Content-Type".to_owned(),
            "application/json".to_owned(),
        )]
    {
        return Err(AppError::validation("Unexpected headers"));
    }
    if args.data.as_deref() != Some(r#"{"id": 1}"#) {
        return Err(AppError::validation("Unexpected body"));
    }
    if !args.no_ui || args.output_format != OutputFormat::Json {
        return Err(AppError::validation("Expected headless json output"));
    }
    Ok(())
}

#[test]
fn invalid_method_is_rejected() -> AppResult<()> {
    if parse_test_args(["cacheprobe", "-X", "fetch", "-u", "/x"]).is_ok() {
        return Err(AppError::validation("Expected Err for invalid method"));
    }
    Ok(())
}
