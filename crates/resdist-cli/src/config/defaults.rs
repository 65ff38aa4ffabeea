use resdist::engine::config::DEFAULT_CUTOFF;

pub const DEFAULT_BASE_URL: &str = "https://files.wwpdb.org/pub/pdb/data/structures/divided/pdb";

pub struct DefaultsConfig {
    pub cutoff: f64,
    pub mass_fallback: bool,
    pub output_directory: String,
    pub base_url: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            mass_fallback: false,
            output_directory: ".".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
