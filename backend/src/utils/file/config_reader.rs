use crate::model::{AppConfig, ClientConfig, ConfigSource};
use crate::utils::{file_reader, open_file, parse_js_config, to_js_config, EnvResolvingReader};
use chrono::Local;
use log::{error, info, warn};
use shared::error::WebConfError;
use shared::model::{ClientConfigDto, ConfigFormat, LoadMode};
use shared::utils::CONSTANTS;
use shared::{config_err, config_err_res};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

enum EitherReader<L, R> {
    Left(L),
    Right(R),
}

impl<L: Read, R: Read> Read for EitherReader<L, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            EitherReader::Left(reader) => reader.read(buf),
            EitherReader::Right(reader) => reader.read(buf),
        }
    }
}

pub fn config_file_reader(file: File, resolve_env: bool) -> impl Read
{
    if resolve_env {
        EitherReader::Left(EnvResolvingReader::new(file_reader(file)))
    } else {
        EitherReader::Right(BufReader::new(file))
    }
}

pub fn parse_client_config_dto(content: &str, format: ConfigFormat) -> Result<ClientConfigDto, WebConfError> {
    match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|err| config_err!("{err}")),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|err| config_err!("{err}")),
        ConfigFormat::Js => {
            let value = parse_js_config(content)?;
            serde_json::from_value(value).map_err(|err| config_err!("{err}"))
        }
    }
}

/// Reads the descriptor without validating it. The format follows the file extension.
pub fn read_client_config_dto(config_file: &Path, resolve_env: bool) -> Result<ClientConfigDto, WebConfError> {
    let Some(format) = ConfigFormat::from_path(config_file) else {
        return config_err_res!("Can't read the config file: {}: unknown file extension, expected js, json, yml or yaml", config_file.display());
    };
    let file = open_file(config_file)
        .map_err(|err| config_err!("Can't read the config file: {}: {err}", config_file.display()))?;
    let mut content = String::new();
    config_file_reader(file, resolve_env)
        .read_to_string(&mut content)
        .map_err(|err| config_err!("Can't read the config file: {}: {err}", config_file.display()))?;
    parse_client_config_dto(&content, format)
        .map_err(|err| config_err!("Can't read the config file: {}: {}", config_file.display(), err.message))
}

/// Validates the descriptor and builds the immutable runtime configuration.
pub fn prepare_client_config(mut dto: ClientConfigDto, mode: LoadMode, source: ConfigSource) -> Result<AppConfig, WebConfError> {
    let mut notices = vec![];
    dto.prepare(mode, &mut notices)
        .map_err(|err| config_err!("Invalid config from {source}:\n{}", err.message))?;
    for notice in &notices {
        warn!("{notice}");
    }
    Ok(AppConfig::new(ClientConfig::from(dto), source, notices))
}

pub fn parse_client_config(content: &str, format: ConfigFormat, mode: LoadMode, source: ConfigSource) -> Result<AppConfig, WebConfError> {
    let dto = parse_client_config_dto(content, format)
        .map_err(|err| config_err!("Can't read the config from {source}: {}", err.message))?;
    prepare_client_config(dto, mode, source)
}

pub fn read_client_config(config_file: &Path, resolve_env: bool, mode: LoadMode) -> Result<AppConfig, WebConfError> {
    let dto = read_client_config_dto(config_file, resolve_env)?;
    prepare_client_config(dto, mode, ConfigSource::File(config_file.to_path_buf()))
}

pub fn render_client_config(config: &ClientConfigDto, format: ConfigFormat) -> Result<String, WebConfError> {
    match format {
        ConfigFormat::Js => to_js_config(config),
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map(|json| format!("{json}\n"))
            .map_err(|err| config_err!("Failed to serialize config: {err}")),
        ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|err| config_err!("Failed to serialize config: {err}")),
    }
}

fn backup_file(path: &Path, backup_dir: &Path) {
    let filename = path.file_name().map_or_else(|| "config".to_string(), |f| f.to_string_lossy().to_string());
    let backup_path = backup_dir.join(format!("{filename}_{}", Local::now().format("%Y%m%d_%H%M%S")));
    match std::fs::copy(path, &backup_path) {
        Ok(_) => info!("Backup of {} written to {}", path.display(), backup_path.display()),
        Err(err) => error!("Could not backup file {}: {err}", backup_path.display()),
    }
}

/// Writes the rendered artifact. An existing file is copied into `backup_dir` first.
pub fn save_client_config(file_path: &Path, backup_dir: Option<&Path>, config: &ClientConfigDto, format: ConfigFormat) -> Result<(), WebConfError> {
    let content = render_client_config(config, format)?;
    if let Some(dir) = backup_dir {
        if file_path.exists() {
            backup_file(file_path, dir);
        }
    }
    info!("Saving file to {}", file_path.display());
    File::create(file_path)
        .and_then(|mut f| f.write_all(content.as_bytes()))
        .map_err(|err| config_err!("Could not write file {}: {err}", file_path.display()))
}

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}

pub fn resolve_path(value: &str) -> PathBuf {
    PathBuf::from(resolve_env_var(value))
}
