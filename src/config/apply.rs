use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{DEFAULT_BASE_URL, ProbeArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::http::{BaseUrl, RequestSpec};

use super::presets::default_dashboard;
use super::types::{ConfigFile, RequestConfig};

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

/// Applies config values for every option the user did not set explicitly.
///
/// # Errors
///
/// Returns an error when the config lists an empty `requests` array.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "base_url")
        && let Some(base_url) = config.base_url
    {
        args.base_url = Some(base_url);
    }

    if !is_explicit(matches, "no_ui")
        && let Some(value) = config.no_ui
    {
        args.no_ui = value;
    }

    if !is_explicit(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }

    if !is_explicit(matches, "verbose")
        && let Some(value) = config.verbose
    {
        args.verbose = value;
    }

    if !is_explicit(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_explicit(matches, "fail_on_error")
        && let Some(value) = config.fail_on_error
    {
        args.fail_on_error = value;
    }

    if let Some(requests) = config.requests {
        if requests.is_empty() {
            return Err(AppError::config(ConfigError::EmptyRequests));
        }
        args.requests = Some(requests);
    }

    Ok(())
}

/// Resolves the origin from CLI/env/config, falling back to the local backend.
///
/// # Errors
///
/// Returns an error when the configured origin is not a valid http(s) URL.
pub fn resolve_base_url(args: &ProbeArgs) -> AppResult<BaseUrl> {
    BaseUrl::parse(args.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
}

/// Picks the request list: an ad-hoc CLI request, the config presets, or the
/// stock dashboard, in that order.
///
/// # Errors
///
/// Returns an error when a request is invalid or request options are given
/// without `--url`.
pub fn resolve_requests(args: &ProbeArgs) -> AppResult<Vec<RequestSpec>> {
    if let Some(url) = args.url.as_deref() {
        let headers = args
            .headers
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.clone()))
            .collect();
        let spec = RequestSpec::new(
            args.method.unwrap_or_default(),
            url,
            headers,
            args.data.clone(),
        )?;
        return Ok(vec![spec]);
    }

    if args.method.is_some() || !args.headers.is_empty() || args.data.is_some() {
        return Err(AppError::validation(
            ValidationError::RequestOptionsRequireUrl,
        ));
    }

    if let Some(requests) = args.requests.as_ref() {
        return requests
            .iter()
            .enumerate()
            .map(|(index, request)| request_spec(index, request))
            .collect();
    }

    Ok(default_dashboard()?)
}

fn request_spec(index: usize, request: &RequestConfig) -> AppResult<RequestSpec> {
    RequestSpec::new(
        request.method,
        request.url.clone(),
        request.headers.clone(),
        request.body.clone(),
    )
    .map_err(|err| {
        AppError::config(ConfigError::InvalidRequest {
            index: index.saturating_add(1),
            source: err,
        })
    })
}
