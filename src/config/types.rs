use clap::ValueEnum;
use std::path::PathBuf;

/// newpost configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the generated post is moved into
    pub posts_dir: PathBuf,

    /// Front-matter `layout` value
    pub layout: String,

    /// Front-matter `categories` value
    pub categories: String,

    /// UTC offset stamped after the date and time, e.g. `+0800`
    pub utc_offset: String,

    /// How the time portion of the `date` field is written
    pub time_style: TimeStyle,
}

/// Time field formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeStyle {
    /// `hour:hour:minute`, unpadded. Kept for compatibility with posts
    /// already generated this way.
    #[default]
    Legacy,
    /// `HH:MM:SS`, zero-padded
    Standard,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("_posts"),
            layout: "article".to_string(),
            categories: "cs, life".to_string(),
            utc_offset: "+0800".to_string(),
            time_style: TimeStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.posts_dir, PathBuf::from("_posts"));
        assert_eq!(config.layout, "article");
        assert_eq!(config.categories, "cs, life");
        assert_eq!(config.utc_offset, "+0800");
        assert_eq!(config.time_style, TimeStyle::Legacy);
    }

    #[test]
    fn test_time_style_from_str() {
        assert_eq!(
            TimeStyle::from_str("legacy", true).unwrap(),
            TimeStyle::Legacy
        );
        assert_eq!(
            TimeStyle::from_str("standard", true).unwrap(),
            TimeStyle::Standard
        );
        assert!(TimeStyle::from_str("iso", true).is_err());
    }
}
