pub mod compute;
pub mod weights;

use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use trna_tai::core::io::error::WriteError;

pub const CODON_WEIGHTS_SUFFIX: &str = "tAI_of_each_codon.txt";
pub const PROFILE_SUFFIX: &str = "tAI_dataframe.txt";
pub const GLOBAL_TAI_SUFFIX: &str = "global_tAI.txt";

/// Creates `<prefix>_<suffix>` (and its parent directory) and hands a buffered
/// writer to `write`.
fn write_output<F>(config: &AppConfig, suffix: &str, write: F) -> Result<PathBuf>
where
    F: FnOnce(BufWriter<File>) -> std::result::Result<(), WriteError>,
{
    let path = config.output_path(suffix);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    write(BufWriter::new(file)).map_err(|e| CliError::Output {
        path: path.clone(),
        source: e.into(),
    })?;
    info!("Wrote {}", path.display());
    Ok(path)
}
