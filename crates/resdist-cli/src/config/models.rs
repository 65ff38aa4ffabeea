use resdist::engine::config::ProximityConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    PdbCode(String),
    PdbFile(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: InputSource,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub core_config: ProximityConfig,
}
