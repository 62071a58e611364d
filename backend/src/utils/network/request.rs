use crate::model::{AppConfig, ConfigSource};
use crate::utils::{debug_if_enabled, parse_client_config};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use shared::error::WebConfError;
use shared::model::{ConfigFormat, LoadMode};
use shared::utils::HTTP_SCHEMES;
use shared::{config_err, config_err_res};
use std::path::Path;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("cs-webconf/", env!("CARGO_PKG_VERSION"));

pub fn create_client(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(timeout)
        .timeout(timeout)
}

pub fn format_http_status(status: StatusCode) -> String {
    let code = status.as_u16();
    match status.canonical_reason() {
        Some(reason) => format!("{code} {reason}"),
        None => code.to_string(),
    }
}

/// The url extension wins over the announced content type, json is the fallback.
fn detect_format(url: &Url, content_type: Option<&str>) -> ConfigFormat {
    ConfigFormat::from_path(Path::new(url.path()))
        .or_else(|| content_type.and_then(ConfigFormat::from_content_type))
        .unwrap_or(ConfigFormat::Json)
}

/// Fetches the descriptor once. Any failure, including the timeout, is a configuration error.
pub async fn fetch_client_config(url: &str, timeout: Duration, mode: LoadMode) -> Result<AppConfig, WebConfError> {
    let parsed_url = Url::parse(url).map_err(|err| config_err!("Invalid config url {url}: {err}"))?;
    if !HTTP_SCHEMES.contains(&parsed_url.scheme()) {
        return config_err_res!("Invalid config url {url}: only http and https are supported");
    }
    let client = create_client(timeout).build()
        .map_err(|err| config_err!("Failed to create http client: {err}"))?;
    debug_if_enabled!("Fetching config from {} with timeout {}s", url, timeout.as_secs());
    let response = client.get(parsed_url.clone()).send().await
        .map_err(|err| config_err!("Failed to fetch config from {url}: {err}"))?;
    let status = response.status();
    if !status.is_success() {
        return config_err_res!("Failed to fetch config from {url}: {}", format_http_status(status));
    }
    let content_type = response.headers().get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let format = detect_format(&parsed_url, content_type.as_deref());
    let content = response.text().await
        .map_err(|err| config_err!("Failed to read config from {url}: {err}"))?;
    parse_client_config(&content, format, mode, ConfigSource::Remote(url.to_string()))
}
