//! Environment variable access with typed parsing.
//!
//! Empty values are treated as unset so that `FOO=` in a `.env` file falls
//! back to the default instead of failing to parse.

use std::env;
use std::str::FromStr;

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_TLS_ENABLED: &str = "TLS_ENABLED";
pub const ENV_TLS_CERT_PATH: &str = "TLS_CERT_PATH";
pub const ENV_TLS_KEY_PATH: &str = "TLS_KEY_PATH";
pub const ENV_SPEECH_API_KEY: &str = "SPEECH_API_KEY";
pub const ENV_SPEECH_API_URL: &str = "SPEECH_API_URL";
pub const ENV_RATE_LIMIT_RPS: &str = "RATE_LIMIT_REQUESTS_PER_SECOND";
pub const ENV_RATE_LIMIT_BURST: &str = "RATE_LIMIT_BURST_SIZE";

/// All variables read by the loader.
pub const ALL_VARS: &[&str] = &[
    ENV_HOST,
    ENV_PORT,
    ENV_TLS_ENABLED,
    ENV_TLS_CERT_PATH,
    ENV_TLS_KEY_PATH,
    ENV_SPEECH_API_KEY,
    ENV_SPEECH_API_URL,
    ENV_RATE_LIMIT_RPS,
    ENV_RATE_LIMIT_BURST,
];

/// Read a variable, ignoring empty values.
pub fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable.
pub fn env_parse<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_string(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("Invalid value for {name}: '{raw}' ({e})")),
        None => Ok(None),
    }
}

/// Read a boolean flag. Accepts true/false, 1/0, yes/no, on/off.
pub fn env_bool(name: &str) -> Result<Option<bool>, String> {
    match env_string(name) {
        Some(raw) => parse_bool(&raw)
            .map(Some)
            .ok_or_else(|| format!("Invalid boolean for {name}: '{raw}'")),
        None => Ok(None),
    }
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
