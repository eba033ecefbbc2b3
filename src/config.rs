//! Configuration file handling for asciify.
//!
//! Loads configuration from `<config dir>/asciify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, Palette};
use crate::convert::ConvertOptions;
use crate::sink::DEFAULT_FILENAME;

/// Configuration file structure for asciify.
/// Loaded from ~/.config/asciify/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<u32>,
    pub aspect_correction: Option<f64>,
    pub charset: Option<String>,
    /// Custom ramp, darkest first. Takes precedence over `charset`.
    pub palette: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub filename: Option<PathBuf>,
}

/// Default config file written by `asciify config init`.
pub const DEFAULT_CONFIG: &str = r#"# asciify configuration

[render]
# Output width in characters
width = 100
# Row scaling; characters are about twice as tall as wide
aspect_correction = 0.5
# Character set: standard, blocks, minimal
charset = "standard"
# Custom ramp from darkest to brightest (overrides charset)
# palette = " .:-=+*#%@"
# Invert brightness (for light backgrounds)
invert = false

[output]
# File name used by --save and the `save` command
filename = "ascii_art.txt"
"#;

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// path is tried and defaults are returned if it doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from(path)
            }
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Conversion options from the `[render]` table, filled in with defaults.
    pub fn convert_options(&self) -> Result<ConvertOptions, ConfigError> {
        let defaults = ConvertOptions::default();
        let render = &self.render;

        let palette = if let Some(ramp) = &render.palette {
            Palette::parse(ramp).map_err(|e| ConfigError::Invalid(e.to_string()))?
        } else if let Some(name) = &render.charset {
            CharSet::from_name(name)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "unknown charset '{}' (expected standard, blocks or minimal)",
                        name
                    ))
                })?
                .palette()
        } else {
            defaults.palette
        };

        let options = ConvertOptions {
            width: render.width.unwrap_or(defaults.width),
            aspect_correction: render.aspect_correction.unwrap_or(defaults.aspect_correction),
            palette,
            invert: render.invert,
        };
        options
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(options)
    }

    /// File name for saved art.
    pub fn output_filename(&self) -> PathBuf {
        self.output
            .filename
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' not found", path.display())
            }
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_empty_config_gives_default_options() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.convert_options().unwrap(), ConvertOptions::default());
        assert_eq!(config.output_filename(), PathBuf::from("ascii_art.txt"));
    }

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.convert_options().unwrap(), ConvertOptions::default());
        assert_eq!(config.output_filename(), PathBuf::from(DEFAULT_FILENAME));
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[render]
width = 60
aspect_correction = 0.45
charset = "blocks"
invert = true

[output]
filename = "out.txt"
"#,
        );

        let config = Config::load(Some(&path)).unwrap();
        let options = config.convert_options().unwrap();

        assert_eq!(options.width, 60);
        assert_eq!(options.aspect_correction, 0.45);
        assert_eq!(options.palette, CharSet::Blocks.palette());
        assert!(options.invert);
        assert_eq!(config.output_filename(), PathBuf::from("out.txt"));
    }

    #[test]
    fn test_palette_overrides_charset() {
        let config: Config = toml::from_str(
            r#"
[render]
charset = "minimal"
palette = "ab"
"#,
        )
        .unwrap();
        let options = config.convert_options().unwrap();
        assert_eq!(options.palette.to_string(), "ab");
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[render\nwidth = ");
        let err = Config::load(Some(&path)).unwrap_err();
        match &err {
            ConfigError::ParseError { path: p, .. } => assert_eq!(p, &path),
            other => panic!("expected ParseError, got {:?}", other),
        }
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_unknown_charset_is_invalid() {
        let config: Config = toml::from_str("[render]\ncharset = \"braille\"").unwrap();
        let err = config.convert_options().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("braille"));
    }

    #[test]
    fn test_short_palette_is_invalid() {
        let config: Config = toml::from_str("[render]\npalette = \"@\"").unwrap();
        assert!(matches!(
            config.convert_options(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_zero_width_is_invalid() {
        let config: Config = toml::from_str("[render]\nwidth = 0").unwrap();
        assert!(matches!(
            config.convert_options(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<Config, _> = toml::from_str("[render]\ngamma = 2.2");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("asciify/config.toml"));
    }
}
