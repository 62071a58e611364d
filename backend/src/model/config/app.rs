use crate::model::ClientConfig;
use shared::error::WebConfError;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Remote(String),
}

impl Display for ConfigSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Remote(url) => write!(f, "url {url}"),
        }
    }
}

/// The loaded client configuration. Built once at startup and handed to
/// every consumer, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: Arc<ClientConfig>,
    pub source: ConfigSource,
    /// Features that were disabled while loading, see `LoadMode::Lenient`.
    pub notices: Vec<WebConfError>,
}

impl AppConfig {
    pub fn new(client: ClientConfig, source: ConfigSource, notices: Vec<WebConfError>) -> Self {
        Self { client: Arc::new(client), source, notices }
    }
}
