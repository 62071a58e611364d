use crate::utils::{CONFIG_FILE, CONFIG_FILE_EXT, CONFIG_FILE_STEM, CONSTANTS};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Selects which value file of the shared descriptor schema is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Deployment {
    #[default]
    Default,
    Development,
    Docker,
    Production,
    Custom(String),
}

impl Deployment {
    const DEFAULT: &'static str = "default";
    const DEVELOPMENT: &'static str = "development";
    const DOCKER: &'static str = "docker";
    const PRODUCTION: &'static str = "production";

    pub fn name(&self) -> &str {
        match self {
            Self::Default => Self::DEFAULT,
            Self::Development => Self::DEVELOPMENT,
            Self::Docker => Self::DOCKER,
            Self::Production => Self::PRODUCTION,
            Self::Custom(name) => name.as_str(),
        }
    }

    /// `config.yml` for the default deployment, `config.<name>.yml` otherwise.
    pub fn config_file_name(&self) -> String {
        match self {
            Self::Default => CONFIG_FILE.to_string(),
            _ => format!("{CONFIG_FILE_STEM}.{}.{CONFIG_FILE_EXT}", self.name()),
        }
    }
}

impl FromStr for Deployment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "" | Self::DEFAULT => Ok(Self::Default),
            Self::DEVELOPMENT | "dev" => Ok(Self::Development),
            Self::DOCKER => Ok(Self::Docker),
            Self::PRODUCTION | "prod" => Ok(Self::Production),
            _ if CONSTANTS.re_deployment.is_match(&name) => Ok(Self::Custom(name)),
            _ => Err(format!("Invalid deployment name '{s}', allowed are lowercase letters, digits, '-' and '_'")),
        }
    }
}

impl Display for Deployment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
