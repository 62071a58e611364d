use regex::Regex;
use std::sync::LazyLock;

pub const CONFIG_PATH: &str = "config";
pub const CONFIG_FILE_STEM: &str = "config";
pub const CONFIG_FILE: &str = "config.yml";
pub const CONFIG_FILE_EXT: &str = "yml";

pub const JS_CONFIG_VAR: &str = "appConfig";

pub const ENV_LOG_LEVEL: &str = "CS_WEBCONF_LOG";
pub const ENV_DEPLOYMENT: &str = "CS_WEBCONF_DEPLOYMENT";

pub struct Constants {
    pub re_env_var: Regex,
    pub re_locale: Regex,
    pub re_deployment: Regex,
    pub re_entity_name: Regex,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        // en, en_US, en-us, zh-Hans-CN, es-419
        re_locale: Regex::new(r"^[A-Za-z]{2,3}(?:[_-][A-Za-z0-9]{2,8})*$").unwrap(),
        re_deployment: Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap(),
        re_entity_name: Regex::new(r"^\S+$").unwrap(),
    }
);
