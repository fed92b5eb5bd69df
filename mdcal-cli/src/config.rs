//! Global mdcal configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration at ~/.config/mdcal/config.toml
///
/// Everything is optional; a missing file means all defaults. Per-run
/// settings (output name, which artifacts) come from the CLI instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    /// Overrides the calendar title derived from the output name.
    pub calendar_title: Option<String>,

    /// Directory scanned by --generate-index. Defaults to the directory
    /// the outputs were written to.
    pub index_dir: Option<PathBuf>,

    /// Heading of the generated index page.
    pub index_title: Option<String>,
}

impl GlobalConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mdcal").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read config at {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_are_optional() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(config.calendar_title.is_none());
        assert!(config.index_dir.is_none());
        assert!(config.index_title.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let config: GlobalConfig = toml::from_str(
            r#"
calendar_title = "Club Events"
index_dir = "/srv/www/calendars"
index_title = "All Calendars"
"#,
        )
        .unwrap();

        assert_eq!(config.calendar_title.as_deref(), Some("Club Events"));
        assert_eq!(config.index_dir, Some(PathBuf::from("/srv/www/calendars")));
        assert_eq!(config.index_title.as_deref(), Some("All Calendars"));
    }
}
