use crate::error::WebConfError;
use crate::{config_err, config_err_res};
use std::sync::LazyLock;
use url::Url;

pub const HTTP_SCHEMES: &[&str] = &["http", "https"];
pub const WS_SCHEMES: &[&str] = &["ws", "wss"];

static RELATIVE_BASE: LazyLock<Url> = LazyLock::new(|| Url::parse("http://localhost/").unwrap());

pub fn concat_path(first: &str, second: &str) -> String {
    let first = first.trim_end_matches('/');
    let second = second.trim_start_matches('/');
    match (first.is_empty(), second.is_empty()) {
        (true, true)   => String::new(),
        (true, false)  => second.to_string(),
        (false, true)  => first.to_string(),
        (false, false) => format!("{first}/{second}"),
    }
}

/// `/signin`, `/api/v1`. Protocol relative urls (`//host`) are not root relative.
pub fn is_root_relative(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//")
}

pub fn check_absolute_url(field: &str, value: &str, schemes: &[&str]) -> Result<Url, WebConfError> {
    let url = Url::parse(value.trim()).map_err(|err| config_err!("{field}: '{value}' is not a valid url: {err}"))?;
    if !schemes.contains(&url.scheme()) {
        return config_err_res!("{field}: '{value}' has scheme '{}', expected one of {schemes:?}", url.scheme());
    }
    if url.host_str().is_none_or(str::is_empty) {
        return config_err_res!("{field}: '{value}' has no host");
    }
    Ok(url)
}

pub fn check_root_relative_path(field: &str, value: &str) -> Result<(), WebConfError> {
    if !is_root_relative(value) {
        return config_err_res!("{field}: '{value}' must be a root relative path starting with '/'");
    }
    if value.chars().any(char::is_whitespace) {
        return config_err_res!("{field}: '{value}' must not contain whitespace");
    }
    RELATIVE_BASE.join(value)
        .map(|_| ())
        .map_err(|err| config_err!("{field}: '{value}' is not a valid path: {err}"))
}

/// Accepts absolute urls with one of the given schemes or root relative paths.
pub fn check_absolute_or_root_relative(field: &str, value: &str, schemes: &[&str]) -> Result<(), WebConfError> {
    if is_root_relative(value) {
        check_root_relative_path(field, value)
    } else {
        check_absolute_url(field, value, schemes).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_path() {
        assert_eq!(concat_path("http://localhost:8080/", "/api/v1"), "http://localhost:8080/api/v1");
        assert_eq!(concat_path("", "/api"), "api");
    }

    #[test]
    fn test_absolute_url() {
        assert!(check_absolute_url("apiDomain", "http://localhost:8080", HTTP_SCHEMES).is_ok());
        assert!(check_absolute_url("apiDomain", "https://cs.example.org", HTTP_SCHEMES).is_ok());
        assert!(check_absolute_url("apiDomain", "ws://localhost:8080", HTTP_SCHEMES).is_err());
        assert!(check_absolute_url("wsDomain", "ws://localhost:8080", WS_SCHEMES).is_ok());
        assert!(check_absolute_url("apiDomain", "localhost:8080", HTTP_SCHEMES).is_err());
        assert!(check_absolute_url("apiDomain", "/api", HTTP_SCHEMES).is_err());
        let err = check_absolute_url("apiDomain", "not a url", HTTP_SCHEMES).unwrap_err();
        assert!(err.message.starts_with("apiDomain:"));
    }

    #[test]
    fn test_root_relative() {
        assert!(check_root_relative_path("signIn", "/signin").is_ok());
        assert!(check_root_relative_path("apiPath", "/api/v1").is_ok());
        assert!(check_root_relative_path("signIn", "signin").is_err());
        assert!(check_root_relative_path("signIn", "//evil.org/signin").is_err());
        assert!(check_root_relative_path("signIn", "/sign in").is_err());
        assert!(check_absolute_or_root_relative("apiTokenUrl", "/oauth2/token", HTTP_SCHEMES).is_ok());
        assert!(check_absolute_or_root_relative("apiTokenUrl", "http://localhost:8080/oauth2/token", HTTP_SCHEMES).is_ok());
        assert!(check_absolute_or_root_relative("apiTokenUrl", "oauth2/token", HTTP_SCHEMES).is_err());
    }
}
