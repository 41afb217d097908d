use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            debug!("Parsed configuration from disk");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

/// Parse configuration tables from a TOML string.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<ConfigTables>(contents).map(AppConfig::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn parses_nested_tables() {
        let config = parse_config(
            r#"
                [appearance]
                theme = "day"

                [window]
                width = 1440.0
                height = 900.0

                [gallery]
                manifest_path = "demo/portfolio.toml"
                masonry = false

                [logging]
                log_level = "info"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.window_width, 1440.0);
        assert_eq!(config.manifest_path, "demo/portfolio.toml");
        assert!(!config.masonry);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.manifest_path, "portfolio.toml");
        assert!(config.masonry);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.window_width, 1024.0);
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
