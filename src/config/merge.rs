use std::path::PathBuf;

use super::env::{
    ENV_HOST, ENV_PORT, ENV_RATE_LIMIT_BURST, ENV_RATE_LIMIT_RPS, ENV_SPEECH_API_KEY,
    ENV_SPEECH_API_URL, ENV_TLS_CERT_PATH, ENV_TLS_ENABLED, ENV_TLS_KEY_PATH, env_bool, env_parse,
    env_string,
};
use super::yaml::YamlConfig;
use super::{ServerConfig, TlsConfig};
use crate::core::speech::DEFAULT_SPEECH_API_URL;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
/// Rates at or above this value turn the per-IP limiter off.
pub const RATE_LIMIT_UNLIMITED: u32 = 100_000;
/// Callbacks arrive from a few shared provider egress IPs, so no limit by default.
pub const DEFAULT_RATE_LIMIT_RPS: u32 = RATE_LIMIT_UNLIMITED;
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 10;

/// Build a configuration from environment variables (with defaults), then
/// apply YAML overrides when present.
pub fn merge_config(yaml: Option<YamlConfig>) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let yaml = yaml.unwrap_or_default();
    let server = yaml.server.unwrap_or_default();
    let speech = yaml.speech.unwrap_or_default();
    let security = yaml.security.unwrap_or_default();

    let host = server
        .host
        .or_else(|| env_string(ENV_HOST))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match server.port {
        Some(port) => port,
        None => env_parse::<u16>(ENV_PORT)?.unwrap_or(DEFAULT_PORT),
    };

    let tls_yaml = server.tls.unwrap_or_default();
    let tls_enabled = match tls_yaml.enabled {
        Some(enabled) => enabled,
        None => env_bool(ENV_TLS_ENABLED)?.unwrap_or(false),
    };
    let tls = if tls_enabled {
        let cert_path = tls_yaml.cert_path.or_else(|| env_string(ENV_TLS_CERT_PATH));
        let key_path = tls_yaml.key_path.or_else(|| env_string(ENV_TLS_KEY_PATH));
        match (cert_path, key_path) {
            (Some(cert), Some(key)) => Some(TlsConfig {
                cert_path: PathBuf::from(cert),
                key_path: PathBuf::from(key),
            }),
            _ => {
                return Err(format!(
                    "TLS is enabled but {ENV_TLS_CERT_PATH} and {ENV_TLS_KEY_PATH} are not both set"
                )
                .into());
            }
        }
    } else {
        None
    };

    let speech_api_key = speech
        .api_key
        .or_else(|| env_string(ENV_SPEECH_API_KEY))
        .unwrap_or_default();

    let speech_api_url = speech
        .api_url
        .or_else(|| env_string(ENV_SPEECH_API_URL))
        .unwrap_or_else(|| DEFAULT_SPEECH_API_URL.to_string());

    let rate_limit_requests_per_second = match security.rate_limit_requests_per_second {
        Some(rps) => rps,
        None => env_parse::<u32>(ENV_RATE_LIMIT_RPS)?.unwrap_or(DEFAULT_RATE_LIMIT_RPS),
    };

    let rate_limit_burst_size = match security.rate_limit_burst_size {
        Some(burst) => burst,
        None => env_parse::<u32>(ENV_RATE_LIMIT_BURST)?.unwrap_or(DEFAULT_RATE_LIMIT_BURST),
    };

    Ok(ServerConfig {
        host,
        port,
        tls,
        speech_api_key,
        speech_api_url,
        rate_limit_requests_per_second,
        rate_limit_burst_size,
    })
}
