use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ConfigFormat {
    /// `var appConfig = {...};` as loaded by the browser.
    #[default]
    Js,
    Json,
    Yaml,
}

impl ConfigFormat {
    const JS: &'static str = "js";
    const JSON: &'static str = "json";
    const YAML: &'static str = "yaml";

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" => Some(Self::Js),
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type.split(';').next().unwrap_or_default().trim().to_lowercase();
        if mime.contains("javascript") || mime.contains("ecmascript") {
            Some(Self::Js)
        } else if mime.contains("json") {
            Some(Self::Json)
        } else if mime.contains("yaml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| format!("Unknown format '{s}', supported are js, json, yaml"))
    }
}

impl Display for ConfigFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Js => Self::JS,
            Self::Json => Self::JSON,
            Self::Yaml => Self::YAML,
        })
    }
}
