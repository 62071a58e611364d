#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::model::{AppConfig, ConfigPaths};
use crate::utils::{fetch_client_config, init_logger, read_client_config, render_client_config, resolve_env_var, resolve_path, save_client_config};
use chrono::{DateTime, Utc};
use clap::Parser;
use env_logger::Target;
use log::{error, info, warn};
use shared::model::{ClientFeatures, ConfigFormat, Deployment, LoadMode};
use shared::utils::{human_readable_byte_size, ENV_DEPLOYMENT};
use std::path::Path;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cs-webconf")]
#[command(version)]
#[command(about = "Validates and renders the web client configuration of the OCPP Central System", long_about = None)]
struct Args {
    /// The config directory
    #[arg(short = 'p', long = "config-path")]
    config_path: Option<String>,

    /// The config file, overrides the deployment file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// The deployment (default, development, docker, production or a custom name)
    #[arg(short = 'd', long = "deployment")]
    deployment: Option<String>,

    /// Load the config from a remote url instead of a file
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// Timeout in seconds for the remote config
    #[arg(long = "timeout", default_value_t = shared::utils::default_remote_timeout_secs())]
    timeout: u64,

    /// Write the rendered config to this file
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Output format, js, json or yaml
    #[arg(short = 'f', long = "format")]
    format: Option<ConfigFormat>,

    /// Directory for backups of an overwritten output file
    #[arg(short = 'b', long = "backup-dir")]
    backup_dir: Option<String>,

    /// Only validate the config
    #[arg(long = "check", default_value_t = false, default_missing_value = "true")]
    check: bool,

    /// Disable inconsistent optional features instead of failing
    #[arg(long = "lenient", default_value_t = false, default_missing_value = "true")]
    lenient: bool,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let print_to_stdout = args.output.is_none() && !args.check;
    init_logger(args.log_level.as_ref(), if print_to_stdout { Target::Stderr } else { Target::Stdout });

    info!("Version: {VERSION}");
    if let Some(bts) = BUILD_TIMESTAMP.to_string().parse::<DateTime<Utc>>().ok().map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string()) {
        info!("Build time: {bts}");
    }

    let deployment = get_deployment(args.deployment.as_deref(), std::env::var(ENV_DEPLOYMENT).ok()).unwrap_or_else(|err| exit!("{}", err));
    let mode = if args.lenient { LoadMode::Lenient } else { LoadMode::Strict };

    let loaded = if let Some(url) = args.url.as_ref() {
        let url = resolve_env_var(url);
        fetch_client_config(&url, Duration::from_secs(args.timeout), mode).await
    } else {
        let config_paths = get_file_paths(args.config_path.as_deref(), args.config_file.as_deref(), deployment);
        info!("Deployment: {}", config_paths.deployment);
        info!("Config dir: {:?}", config_paths.config_path);
        read_client_config(Path::new(&config_paths.config_file_path), true, mode)
    };
    let app_config = loaded.unwrap_or_else(|err| exit!("{}", err));

    print_info(&app_config);

    if args.check {
        info!("Config is valid");
        return;
    }

    let format = args.format
        .or_else(|| args.output.as_deref().and_then(|output| ConfigFormat::from_path(Path::new(output))))
        .unwrap_or_default();
    let dto = app_config.client.to_dto();
    match args.output.as_ref() {
        Some(output) => {
            let backup_dir = args.backup_dir.as_ref().map(|dir| resolve_path(dir));
            save_client_config(&resolve_path(output), backup_dir.as_deref(), &dto, format)
                .unwrap_or_else(|err| exit!("{}", err));
        }
        None => {
            let content = render_client_config(&dto, format).unwrap_or_else(|err| exit!("{}", err));
            print!("{content}");
        }
    }
}

/// Priority: cli argument, environment, default.
fn get_deployment(arg: Option<&str>, env_value: Option<String>) -> Result<Deployment, String> {
    arg.map(ToString::to_string)
        .or(env_value)
        .map_or_else(|| Ok(Deployment::default()), |name| name.parse::<Deployment>())
}

fn get_file_paths(config_path: Option<&str>, config_file: Option<&str>, deployment: Deployment) -> ConfigPaths {
    let config_path: String = resolve_env_var(&config_path.map_or_else(utils::get_default_config_path, ToString::to_string));
    let config_file: String = resolve_env_var(&config_file.map_or_else(|| utils::get_default_config_file_path(&config_path, &deployment), ToString::to_string));

    ConfigPaths {
        config_path,
        config_file_path: config_file,
        deployment,
    }
}

fn print_info(app_config: &AppConfig) {
    let client = &app_config.client;
    info!("Config source: {}", app_config.source);
    info!("Features: {}", client.features);
    info!("Default language: {}", client.default_language);
    info!("Api: {}", client.api.base_url());
    info!("Ocpp api: {}", client.ocpp_api.base_url());
    info!("Token url: {}", client.token_url());
    info!("Websocket: {}", client.ws_domain);
    if client.is_enabled(ClientFeatures::UPLOAD) {
        info!("Max upload size: {}", human_readable_byte_size(client.max_file_size));
    } else {
        info!("Uploads are disabled");
    }
    if client.is_enabled(ClientFeatures::ADMIN) {
        info!("Admin references: {}", client.admin_references.keys().map(String::as_str).collect::<Vec<_>>().join(", "));
    }
    if !app_config.notices.is_empty() {
        warn!("Loaded with {} disabled feature(s)", app_config.notices.len());
    }
}
