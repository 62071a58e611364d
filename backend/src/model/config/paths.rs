use shared::model::Deployment;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: String,
    pub config_file_path: String,
    pub deployment: Deployment,
}
