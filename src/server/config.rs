//! Environment-based server configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration read from environment variables (and `.env` via `dotenvy`).
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Valkey/Redis URL used for the session store
    pub valkey_url: String,
    /// Root directory uploaded documents are written beneath
    pub storage_path: String,
    /// Address the HTTP server listens on
    pub bind_address: SocketAddr,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::BlankEnvVar)` - A required variable is set but blank
    /// - `Err(ConfigError::InvalidBindAddress)` - `BIND_ADDRESS` does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| match lookup(var) {
            None => Err(ConfigError::MissingEnvVar(var)),
            Some(value) if value.trim().is_empty() => Err(ConfigError::BlankEnvVar(var)),
            Some(value) => Ok(value),
        };

        let bind_address = lookup("BIND_ADDRESS")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            storage_path: required("STORAGE_PATH")?,
            bind_address: bind_address
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddress {
                    value: bind_address.clone(),
                    source,
                })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |var: &str| vars.get(var).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("DATABASE_URL", "postgres://kk@localhost/kk"),
        ("VALKEY_URL", "redis://localhost:6379"),
        ("STORAGE_PATH", "/var/lib/kk-intake"),
    ];

    #[test]
    fn defaults_bind_address() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS.parse().unwrap());
        assert_eq!(config.storage_path, "/var/lib/kk-intake");
    }

    #[test]
    fn reports_missing_variable_by_name() {
        let result = Config::from_lookup(lookup(&REQUIRED[..2]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar("STORAGE_PATH"))));
    }

    #[test]
    fn rejects_blank_variable() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = ("VALKEY_URL", "  ");

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(result, Err(ConfigError::BlankEnvVar("VALKEY_URL"))));
    }

    #[test]
    fn rejects_unparseable_bind_address() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("BIND_ADDRESS", "localhost"));

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidBindAddress { ref value, .. }) if value == "localhost"
        ));
    }
}
