use clap::{CommandFactory, FromArgMatches};

use crate::error::{AppError, AppResult};

use super::ProbeArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<ProbeArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = ProbeArgs::command().try_get_matches_from(args)?;
    ProbeArgs::from_arg_matches(&matches).map_err(AppError::from)
}
