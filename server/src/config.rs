use std::env::VarError;
use std::fmt::Display;
use std::net::SocketAddr;
use std::num::NonZeroU64;
use std::str::FromStr;
use std::time::Duration;

use error_stack::{Context, Report, ResultExt};
use kernel::KernelError;

static BOOKS_STORE: &str = "BOOKS_STORE";
static SERVER_ADDR: &str = "SERVER_ADDR";
static REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug)]
pub struct UnknownStore(String);

impl Display for UnknownStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown store `{}`, expected `postgres` or `memory`",
            self.0
        )
    }
}

impl Context for UnknownStore {}

impl FromStr for StoreKind {
    type Err = UnknownStore;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            _ => Err(UnknownStore(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    pub store: StoreKind,
    pub bind: SocketAddr,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let store = parse_env::<StoreKind>(BOOKS_STORE)?.unwrap_or(StoreKind::Postgres);
        let bind = parse_env::<SocketAddr>(SERVER_ADDR)?
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));
        let timeout = parse_env::<NonZeroU64>(REQUEST_TIMEOUT_SECS)?
            .map_or(DEFAULT_REQUEST_TIMEOUT_SECS, NonZeroU64::get);
        Ok(Self {
            store,
            bind,
            request_timeout: Duration::from_secs(timeout),
        })
    }
}

fn parse_env<T>(key: &str) -> error_stack::Result<Option<T>, KernelError>
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
                .attach_printable(format!("Failed to read `{key}`")))
        }
    };
    value
        .parse::<T>()
        .map(Some)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Invalid value `{value}` for `{key}`"))
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU64;

    use kernel::KernelError;

    use crate::config::{parse_env, StoreKind};

    #[test]
    fn parse_store_kind() {
        assert_eq!("postgres".parse::<StoreKind>().ok(), Some(StoreKind::Postgres));
        assert_eq!(" Memory ".parse::<StoreKind>().ok(), Some(StoreKind::Memory));
        assert!("sqlite".parse::<StoreKind>().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        std::env::set_var("SERVER_TEST_ZERO_TIMEOUT", "0");
        let parsed = parse_env::<NonZeroU64>("SERVER_TEST_ZERO_TIMEOUT");
        assert_eq!(
            parsed.map_err(|e| *e.current_context()),
            Err(KernelError::Internal)
        );
    }

    #[test]
    fn unset_falls_back_and_bad_store_fails() {
        let parsed = parse_env::<NonZeroU64>("SERVER_TEST_UNSET_TIMEOUT").ok();
        assert_eq!(parsed, Some(None));

        std::env::set_var("SERVER_TEST_STORE", "sqlite");
        let parsed = parse_env::<StoreKind>("SERVER_TEST_STORE");
        assert_eq!(
            parsed.map_err(|e| *e.current_context()),
            Err(KernelError::Internal)
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_value_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("SERVER_TEST_NON_UNICODE", OsStr::from_bytes(&[0x31, 0xff]));
        let parsed = parse_env::<NonZeroU64>("SERVER_TEST_NON_UNICODE");
        assert_eq!(
            parsed.map_err(|e| *e.current_context()),
            Err(KernelError::Internal)
        );
    }
}
