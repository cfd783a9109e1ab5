//! Environment-driven configuration.
//!
//! The environment is read once, the first time [`get`] is called.

use std::{
    env::{self, VarError},
    sync::OnceLock,
};

/// Environment variable holding a `u64` seed for the per-thread default generators.
pub const ENV_VAR_SEED: &str = "ORRERY_SEED";

/// Crate-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    seed: Option<u64>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            seed: parse_seed(env::var(ENV_VAR_SEED)),
        }
    }

    /// Returns a copy of `self` with the given seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// The seed used for per-thread default generators, if one was configured.
    ///
    /// When this is [`None`], generators are seeded from entropy.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn parse_seed(var: Result<String, VarError>) -> Option<u64> {
    match var {
        Ok(s) => match s.trim().parse() {
            Ok(seed) => Some(seed),
            Err(e) => {
                log::warn!("ignoring invalid value for `{ENV_VAR_SEED}` ({s:?}): {e}");
                None
            }
        },
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(s)) => {
            log::warn!("ignoring non-unicode value for `{ENV_VAR_SEED}`: {s:?}");
            None
        }
    }
}

/// Returns the process-wide configuration.
pub fn get() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = Config::from_env();
        log::debug!("using configuration {config:?}");
        config
    })
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    #[test]
    fn seed_parsing() {
        assert_eq!(parse_seed(Ok("42".into())), Some(42));
        assert_eq!(parse_seed(Ok(" 7 \n".into())), Some(7));
        assert_eq!(parse_seed(Ok("-1".into())), None);
        assert_eq!(parse_seed(Ok("seed".into())), None);
        assert_eq!(parse_seed(Err(VarError::NotPresent)), None);
        assert_eq!(
            parse_seed(Err(VarError::NotUnicode(OsString::from("x")))),
            None
        );
    }

    #[test]
    fn with_seed() {
        assert_eq!(Config::default().seed(), None);
        assert_eq!(Config::default().with_seed(3).seed(), Some(3));
    }
}
