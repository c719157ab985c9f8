use std::env;
use std::io::ErrorKind;
use std::path::PathBuf;
use anyhow::{bail, Context, Result};

use crate::routes;

#[derive(Debug, Clone)]
pub struct Config {
    pub home_path: String,
    pub api_group: String,
    pub v1_group: String,
    pub alive_path: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            home_path: routes::HOME.to_string(),
            api_group: routes::API_GROUP.to_string(),
            v1_group: routes::V1_GROUP.to_string(),
            alive_path: routes::ALIVE.to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let home_path = lookup("HOME_PATH").unwrap_or(defaults.home_path);
        validate_segment("HOME_PATH", &home_path, true)?;

        let api_group = lookup("API_GROUP").unwrap_or(defaults.api_group);
        validate_segment("API_GROUP", &api_group, false)?;

        let v1_group = lookup("V1_GROUP").unwrap_or(defaults.v1_group);
        validate_segment("V1_GROUP", &v1_group, false)?;

        let alive_path = lookup("ALIVE_PATH").unwrap_or(defaults.alive_path);
        validate_segment("ALIVE_PATH", &alive_path, false)?;

        let service_port = match lookup("SERVICE_PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            None => defaults.service_port,
        };

        let service_host = lookup("SERVICE_HOST").unwrap_or(defaults.service_host);

        let config = Config {
            home_path,
            api_group,
            v1_group,
            alive_path,
            service_port,
            service_host,
        };

        if config.home_path == config.alive_route() {
            bail!(
                "HOME_PATH and the alive route (API_GROUP + V1_GROUP + ALIVE_PATH) must differ, both are '{}'",
                config.home_path
            );
        }

        for (var, path) in [
            ("HOME_PATH", config.home_path.clone()),
            ("API_GROUP + V1_GROUP + ALIVE_PATH", config.alive_route()),
        ] {
            if is_reserved(&path) {
                bail!("{} resolves to '{}', which is reserved for API documentation", var, path);
            }
        }

        Ok(config)
    }

    /// Full path of the liveness probe.
    pub fn alive_route(&self) -> String {
        format!("{}{}{}", self.api_group, self.v1_group, self.alive_path)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Home route: {}", self.home_path);
        tracing::info!("  Alive route: {}", self.alive_route());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

/// Interpret the result of loading a `.env` file. A missing file is not an
/// error; a file that exists but can't be read or parsed is.
pub fn dotenv_status(
    result: std::result::Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}

// Swagger UI owns its root, the root with a trailing slash and everything below.
fn is_reserved(path: &str) -> bool {
    path == routes::OPENAPI_JSON
        || path == routes::SWAGGER_UI
        || path
            .strip_prefix(routes::SWAGGER_UI)
            .is_some_and(|rest| rest.starts_with('/'))
}

// axum panics on paths that don't start with '/', treats braces and '*' as
// captures, and panics on parts starting with ':' (the pre-0.8 capture
// syntax), so reject those up front.
fn validate_segment(var: &str, value: &str, allow_trailing_slash: bool) -> Result<()> {
    if !value.starts_with('/') {
        bail!("{} must start with '/', got '{}'", var, value);
    }
    if value.contains(['{', '}', '*']) {
        bail!("{} must not contain '{{', '}}' or '*', got '{}'", var, value);
    }
    if value.split('/').any(|part| part.starts_with(':')) {
        bail!("{} must not have a path part starting with ':', got '{}'", var, value);
    }
    if !allow_trailing_slash && value.ends_with('/') {
        bail!("{} must not end with '/', got '{}'", var, value);
    }
    Ok(())
}
