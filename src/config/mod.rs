use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Chart dimensions, in SVG pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_label_width")]
    pub label_width: f64,
    #[serde(default = "default_summary_width")]
    pub summary_width: f64,
    #[serde(default = "default_time_label_height")]
    pub time_label_height: f64,
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    #[serde(default = "default_row_gap")]
    pub row_gap: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_width() -> f64 {
    2000.0
}
fn default_label_width() -> f64 {
    160.0
}
fn default_summary_width() -> f64 {
    180.0
}
fn default_time_label_height() -> f64 {
    60.0
}
fn default_row_height() -> f64 {
    60.0
}
fn default_row_gap() -> f64 {
    12.0
}
fn default_stroke_width() -> f64 {
    3.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            label_width: default_label_width(),
            summary_width: default_summary_width(),
            time_label_height: default_time_label_height(),
            row_height: default_row_height(),
            row_gap: default_row_gap(),
            stroke_width: default_stroke_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_format() -> String {
    "svg".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            default_format: default_format(),
            log_level: default_log_level(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.eldgraph`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eldgraph")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldgraph.conf")
    }

    /// Config path in use: the `--config` override or the default file.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject dimensions that would produce a degenerate coordinate space.
    pub fn validate(&self) -> AppResult<()> {
        let c = &self.chart;
        if c.width <= c.label_width + c.summary_width {
            return Err(AppError::Config(format!(
                "chart.width ({}) must exceed label_width + summary_width ({})",
                c.width,
                c.label_width + c.summary_width
            )));
        }
        if c.row_height <= 0.0 || c.row_gap < 0.0 || c.time_label_height < 0.0 {
            return Err(AppError::Config(
                "row_height must be positive, row_gap and time_label_height non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Write the default configuration. Existing files are kept unless
    /// `force` is set. Returns whether the file was written.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;
        Ok(true)
    }

    /// Keys present in the default configuration but missing from the file
    /// (dotted paths, e.g. `chart.row_gap`). Missing keys fall back to
    /// defaults when loading; this only reports them.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path)?;
        let on_disk: Value = serde_yaml::from_str(&content)?;
        let defaults = serde_yaml::to_value(Config::default())?;

        let mut missing = Vec::new();
        collect_missing(&defaults, &on_disk, "", &mut missing);
        Ok(missing)
    }
}

fn collect_missing(defaults: &Value, actual: &Value, prefix: &str, out: &mut Vec<String>) {
    let Some(map) = defaults.as_mapping() else {
        return;
    };

    for (key, default_val) in map {
        let Some(name) = key.as_str() else { continue };
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match actual.as_mapping().and_then(|m| m.get(key)) {
            None => out.push(dotted),
            Some(val) => collect_missing(default_val, val, &dotted, out),
        }
    }
}
