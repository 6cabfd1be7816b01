use std::{env, path::PathBuf};

use directories::ProjectDirs;

use crate::reader::ReaderConfig;

pub const DATA_DIR_ENV: &str = "GRACELYRICS_DATA_DIR";
pub const CATALOG_ENV: &str = "GRACELYRICS_CATALOG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub reader: ReaderConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let catalog_path = env::var_os(CATALOG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            data_dir,
            catalog_path,
            reader: ReaderConfig::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "gracelyrics")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".data"))
}
