use crate::error::ValidationError;
use crate::http::RequestSpec;

/// Paths shown on the stock dashboard, in display order.
///
/// `/api/cache/hit` appears three times so repeated hits against a warm cache
/// can be compared with the first one.
pub(super) const DASHBOARD_PATHS: [&str; 6] = [
    "/api/cache/hit",
    "/api/no-cache/hit",
    "/api/no-cache/posts",
    "/api/cache/posts",
    "/api/cache/hit",
    "/api/cache/hit",
];

/// The stock dashboard: one GET per cached/uncached backend endpoint.
///
/// # Errors
///
/// Never fails for the built-in paths; the `Result` comes from
/// [`RequestSpec::get`] validation.
pub fn default_dashboard() -> Result<Vec<RequestSpec>, ValidationError> {
    DASHBOARD_PATHS.iter().map(|path| RequestSpec::get(*path)).collect()
}
