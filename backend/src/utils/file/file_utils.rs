use shared::model::Deployment;
use shared::utils::CONFIG_PATH;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const IO_BUFFER_SIZE: usize = 64 * 1024; // 64kb

pub fn file_reader<R>(r: R) -> std::io::BufReader<R>
where
    R: std::io::Read,
{
    std::io::BufReader::with_capacity(IO_BUFFER_SIZE, r)
}

pub fn open_file(file_name: &Path) -> Result<File, std::io::Error> {
    File::open(file_name)
}

pub fn get_exe_path() -> PathBuf {
    let default_path = std::path::PathBuf::from("./");
    let current_exe = std::env::current_exe();
    match current_exe {
        Ok(exe) => {
            match fs::read_link(&exe) {
                Ok(f) => f.parent().map_or(default_path, std::path::Path::to_path_buf),
                Err(_) => exe.parent().map_or(default_path, std::path::Path::to_path_buf)
            }
        }
        Err(_) => default_path
    }
}

fn get_default_path(file: &str) -> String {
    let path: PathBuf = get_exe_path();
    let default_path = path.join(file);
    String::from(if default_path.exists() {
        default_path.to_str().unwrap_or(file)
    } else {
        file
    })
}

pub fn get_default_file_path(config_path: &str, file: &str) -> String {
    let path: PathBuf = PathBuf::from(config_path);
    path.join(file).to_string_lossy().to_string()
}

#[inline]
pub fn get_default_config_path() -> String {
    get_default_path(CONFIG_PATH)
}

#[inline]
pub fn get_default_config_file_path(config_path: &str, deployment: &Deployment) -> String {
    get_default_file_path(config_path, &deployment.config_file_name())
}
