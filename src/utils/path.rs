//! Path utilities: expand `~`, validate absolute output paths.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Output files must be given as absolute paths (after `~` expansion).
pub fn absolute_output_path(file: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(file);
    if !Path::new(&path).is_absolute() {
        return Err(AppError::InvalidInput(format!(
            "Output file path must be absolute: {file}"
        )));
    }
    Ok(path)
}
