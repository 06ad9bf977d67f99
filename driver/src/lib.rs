use std::env::VarError;
use std::str::FromStr;

use error_stack::{Context, Report, ResultExt};
use kernel::KernelError;

pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to read environment variable `{key}`"))
}

/// Parses an optional variable. Unset is `None`; set but unreadable or
/// unparsable is an error.
pub(crate) fn env_parsed<T>(key: &str) -> error_stack::Result<Option<T>, KernelError>
where
    T: FromStr,
    T::Err: Context,
{
    let value = match dotenvy::var(key) {
        Ok(value) => value,
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => return Ok(None),
        Err(e) => {
            return Err(Report::new(e)
                .change_context(KernelError::Internal)
                .attach_printable(format!("Failed to read environment variable `{key}`")))
        }
    };
    value
        .parse::<T>()
        .map(Some)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Invalid value `{value}` for `{key}`"))
}
