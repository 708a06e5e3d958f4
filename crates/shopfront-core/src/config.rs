use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default store location, relative to the working directory. `mode=rwc`
/// creates the database file on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db?mode=rwc";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// Every variable has a default: an unconfigured process starts against a
/// local `shop.db` on port 3000.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database_url = or_default("DATABASE_URL", DEFAULT_DATABASE_URL);
    let env = parse_environment(&or_default("SHOPFRONT_ENV", "development"));
    let bind_addr = parse_addr("SHOPFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SHOPFRONT_LOG_LEVEL", "info");

    let db_max_connections = parse_u32("SHOPFRONT_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("SHOPFRONT_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("SHOPFRONT_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn empty_env_builds_full_default_config() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults should parse");

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.db_min_connections, 1);
        assert_eq!(config.db_acquire_timeout_secs, 10);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("DATABASE_URL", "sqlite://catalog.db?mode=rwc");
        map.insert("SHOPFRONT_ENV", "production");
        map.insert("SHOPFRONT_BIND_ADDR", "127.0.0.1:8080");
        map.insert("SHOPFRONT_DB_MAX_CONNECTIONS", "25");

        let config = build_app_config(lookup_from_map(&map)).expect("valid config");

        assert_eq!(config.database_url, "sqlite://catalog.db?mode=rwc");
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.db_max_connections, 25);
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPFRONT_BIND_ADDR", "not-an-address");

        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_BIND_ADDR"),
            "expected InvalidEnvVar(SHOPFRONT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn invalid_pool_size_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPFRONT_DB_MAX_CONNECTIONS", "lots");

        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_DB_MAX_CONNECTIONS"),
            "expected InvalidEnvVar(SHOPFRONT_DB_MAX_CONNECTIONS), got: {result:?}"
        );
    }

    #[test]
    fn app_config_debug_redacts_database_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[redacted]"));
        assert!(!rendered.contains("shop.db"));
    }
}
