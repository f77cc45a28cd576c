use std::path::{Path, PathBuf};
use trna_tai::engine::config::TaiConfig;

pub struct AppConfig {
    pub output_prefix: PathBuf,
    pub core_config: TaiConfig,
}

impl AppConfig {
    /// `<prefix>_<suffix>`, keeping the prefix's directory.
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        prefixed_path(&self.output_prefix, suffix)
    }
}

pub fn prefixed_path(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push("_");
    name.push(suffix);
    prefix.with_file_name(name)
}
