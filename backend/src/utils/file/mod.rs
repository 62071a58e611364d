mod config_reader;
mod env_resolving_reader;
mod file_utils;
mod js_config_parser;

pub use self::config_reader::*;
pub use self::env_resolving_reader::*;
pub use self::file_utils::*;
pub use self::js_config_parser::*;
