use env_logger::{Builder, Target};
use log::{info, LevelFilter};
use shared::utils::ENV_LOG_LEVEL;

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "reqwest::connect",
    "hyper_util::client",
    "rustls",
];

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

/// Applies `info` or `debug,shared=trace` style settings to the builder and returns the
/// normalized entries.
fn apply_log_levels(log_builder: &mut Builder, log_level: &str) -> Vec<String> {
    let mut log_levels = vec![];
    if log_level.contains('=') {
        for pair in log_level.split(',') {
            if pair.contains('=') {
                let mut kv_iter = pair.split('=').map(str::trim);
                if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                    let log_level = get_log_level(level);
                    log_levels.push(format!("{module}={log_level}"));
                    log_builder.filter_module(module, log_level);
                }
            } else {
                let level = get_log_level(pair);
                log_levels.push(level.to_string());
                log_builder.filter_level(level);
            }
        }
    } else {
        let level = get_log_level(log_level);
        log_builder.filter_level(level);
        log_levels.push(level.to_string());
    }
    log_levels
}

/// Logs go to stdout unless the rendered artifact is printed there.
pub fn init_logger(user_log_level: Option<&String>, target: Target) {
    let env_log_level = std::env::var(ENV_LOG_LEVEL).ok();

    let mut log_builder = Builder::from_default_env();
    log_builder.target(target);

    // priority  CLI-Argument, Env-Var, Default
    let log_level = user_log_level
        .map(std::string::ToString::to_string)
        .or(env_log_level)
        .unwrap_or_else(|| "info".to_string());

    let log_levels = apply_log_levels(&mut log_builder, &log_level);
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    log_builder.init();
    info!("Log Level {}", &log_levels.join(", "));
}
