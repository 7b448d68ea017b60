use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{MatchingParams, TierThresholds};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub reporting: ReportingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_synthetic_rows")]
    pub synthetic_rows: usize,
    #[serde(default = "default_synthetic_seed")]
    pub synthetic_seed: u64,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            model_path: default_model_path(),
            synthetic_rows: default_synthetic_rows(),
            synthetic_seed: default_synthetic_seed(),
        }
    }
}

fn default_dataset_path() -> String { "data/train.csv".to_string() }
fn default_model_path() -> String { "models/house_price_model.json".to_string() }
fn default_synthetic_rows() -> usize { 1000 }
fn default_synthetic_seed() -> u64 { 42 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_strict_area_tolerance")]
    pub strict_area_tolerance: f64,
    #[serde(default = "default_strict_year_window")]
    pub strict_year_window: i32,
    #[serde(default = "default_strict_quality_window")]
    pub strict_quality_window: u8,
    #[serde(default = "default_strict_limit")]
    pub strict_limit: usize,
    #[serde(default = "default_fallback_area_tolerance")]
    pub fallback_area_tolerance: f64,
    #[serde(default = "default_fallback_bedroom_window")]
    pub fallback_bedroom_window: u32,
    #[serde(default = "default_fallback_year_window")]
    pub fallback_year_window: i32,
    #[serde(default = "default_fallback_limit")]
    pub fallback_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            strict_area_tolerance: default_strict_area_tolerance(),
            strict_year_window: default_strict_year_window(),
            strict_quality_window: default_strict_quality_window(),
            strict_limit: default_strict_limit(),
            fallback_area_tolerance: default_fallback_area_tolerance(),
            fallback_bedroom_window: default_fallback_bedroom_window(),
            fallback_year_window: default_fallback_year_window(),
            fallback_limit: default_fallback_limit(),
        }
    }
}

fn default_strict_area_tolerance() -> f64 { 0.10 }
fn default_strict_year_window() -> i32 { 5 }
fn default_strict_quality_window() -> u8 { 1 }
fn default_strict_limit() -> usize { 5 }
fn default_fallback_area_tolerance() -> f64 { 0.20 }
fn default_fallback_bedroom_window() -> u32 { 1 }
fn default_fallback_year_window() -> i32 { 10 }
fn default_fallback_limit() -> usize { 10 }

impl From<&MatchingSettings> for MatchingParams {
    fn from(s: &MatchingSettings) -> Self {
        MatchingParams {
            strict_area_tolerance: s.strict_area_tolerance,
            strict_year_window: s.strict_year_window,
            strict_quality_window: s.strict_quality_window,
            strict_limit: s.strict_limit,
            fallback_area_tolerance: s.fallback_area_tolerance,
            fallback_bedroom_window: s.fallback_bedroom_window,
            fallback_year_window: s.fallback_year_window,
            fallback_limit: s.fallback_limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportingSettings {
    #[serde(default = "default_excellent_below")]
    pub excellent_below: f64,
    #[serde(default = "default_good_below")]
    pub good_below: f64,
}

impl Default for ReportingSettings {
    fn default() -> Self {
        Self {
            excellent_below: default_excellent_below(),
            good_below: default_good_below(),
        }
    }
}

fn default_excellent_below() -> f64 { 10_000.0 }
fn default_good_below() -> f64 { 25_000.0 }

impl From<&ReportingSettings> for TierThresholds {
    fn from(s: &ReportingSettings) -> Self {
        TierThresholds {
            excellent_below: s.excellent_below,
            good_below: s.good_below,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOUSE_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOUSE__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("HOUSE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
