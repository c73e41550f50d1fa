//! Configuration module
//!
//! There is no configuration file. Defaults live on `Config` and
//! command-line flags are layered on top of them.

mod types;

pub use types::{Config, TimeStyle};

use crate::error::{NewPostError, Result};
use std::path::PathBuf;

/// Values supplied on the command line; `None` keeps the default
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub posts_dir: Option<PathBuf>,
    pub layout: Option<String>,
    pub categories: Option<String>,
    pub utc_offset: Option<String>,
    pub time_style: Option<TimeStyle>,
}

/// Build a configuration from defaults plus command-line overrides
pub fn from_overrides(overrides: Overrides) -> Result<Config> {
    let defaults = Config::default();

    let config = Config {
        posts_dir: overrides.posts_dir.unwrap_or(defaults.posts_dir),
        layout: overrides.layout.unwrap_or(defaults.layout),
        categories: overrides.categories.unwrap_or(defaults.categories),
        utc_offset: overrides.utc_offset.unwrap_or(defaults.utc_offset),
        time_style: overrides.time_style.unwrap_or(defaults.time_style),
    };

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.posts_dir.as_os_str().is_empty() {
        return Err(NewPostError::Config(
            "posts directory must not be empty".to_string(),
        ));
    }

    if !is_valid_offset(&config.utc_offset) {
        return Err(NewPostError::Config(format!(
            "Invalid UTC offset '{}': expected [+-]HHMM, e.g. +0800",
            config.utc_offset
        )));
    }

    Ok(())
}

/// `[+-]HHMM` with hours up to 14 and minutes up to 59
fn is_valid_offset(offset: &str) -> bool {
    let bytes = offset.as_bytes();
    if bytes.len() != 5 || !matches!(bytes[0], b'+' | b'-') {
        return false;
    }
    if !bytes[1..].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let hours: u32 = offset[1..3].parse().unwrap_or(u32::MAX);
    let minutes: u32 = offset[3..5].parse().unwrap_or(u32::MAX);
    hours <= 14 && minutes <= 59
}
