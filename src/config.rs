use crate::error::CloudError;
use crate::render;
use std::env;
use std::path::PathBuf;

/// Run configuration
///
/// A flat set of load-time options constructed once at startup and passed by
/// reference into each pipeline stage. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lower every character of every line.
    pub lowercase_everything: bool,
    /// Upper every character of every line. Mutually exclusive with
    /// `lowercase_everything`.
    pub uppercase_everything: bool,
    /// Uppercase the first character of every whitespace-delimited word,
    /// leaving the rest of each word untouched. A no-op when
    /// `uppercase_everything` is set.
    pub capitalize_words: bool,
    /// Output canvas width in pixels.
    pub width: u32,
    /// Output canvas height in pixels.
    pub height: u32,
    /// Leave uncovered pixels fully transparent instead of painting a
    /// background color.
    pub background_transparent: bool,
    /// Background color, named (e.g. "white") or "#rrggbb". Ignored when
    /// `background_transparent` is set.
    pub background_color: String,
    /// Load the font from `font_path` instead of probing system locations.
    pub use_custom_font: bool,
    pub font_path: PathBuf,
    /// Shape the cloud with the image at `mask_path`.
    pub use_custom_mask: bool,
    pub mask_path: PathBuf,
    /// Dump the normalized lines and the tally to the log.
    pub debug: bool,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lowercase_everything: false,
            uppercase_everything: false,
            capitalize_words: true,
            width: 1000,
            height: 500,
            background_transparent: false,
            background_color: "black".to_string(),
            use_custom_font: false,
            font_path: PathBuf::new(),
            use_custom_mask: false,
            mask_path: PathBuf::new(),
            debug: true,
            input_path: resolve_beside_executable("input.txt"),
            output_path: PathBuf::from("resulting_wordcloud.png"),
        }
    }
}

impl Config {
    /// Reject contradictory or out-of-range options. Runs before any I/O so
    /// a bad configuration never leaves partial artifacts behind.
    pub fn validate(&self) -> Result<(), CloudError> {
        if self.width == 0 || self.height == 0 {
            return Err(CloudError::Config(format!(
                "Canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.lowercase_everything && self.uppercase_everything {
            return Err(CloudError::Config(
                "lowercase_everything and uppercase_everything are mutually exclusive".to_string(),
            ));
        }

        if !self.background_transparent && render::parse_color(&self.background_color).is_none() {
            return Err(CloudError::Config(format!(
                "Unknown background color {:?}",
                self.background_color
            )));
        }

        if self.use_custom_font && self.font_path.as_os_str().is_empty() {
            return Err(CloudError::Config(
                "use_custom_font is set but font_path is empty".to_string(),
            ));
        }

        if self.use_custom_mask && self.mask_path.as_os_str().is_empty() {
            return Err(CloudError::Config(
                "use_custom_mask is set but mask_path is empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Resolve a filename relative to the running executable's directory, so the
/// tool finds its input no matter which directory it is launched from.
pub fn resolve_beside_executable(name: &str) -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(name)))
        .unwrap_or_else(|| PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CloudError::Config(_))));
    }

    #[test]
    fn test_zero_height_rejected() {
        let config = Config {
            height: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CloudError::Config(_))));
    }

    #[test]
    fn test_contradictory_case_flags_rejected() {
        let config = Config {
            lowercase_everything: true,
            uppercase_everything: true,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CloudError::Config(_))));
    }

    #[test]
    fn test_unknown_background_color_rejected() {
        let config = Config {
            background_color: "not-a-color".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CloudError::Config(_))));
    }

    #[test]
    fn test_unknown_color_allowed_when_transparent() {
        let config = Config {
            background_transparent: true,
            background_color: "not-a-color".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_font_requires_path() {
        let config = Config {
            use_custom_font: true,
            font_path: PathBuf::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CloudError::Config(_))));
    }

    #[test]
    fn test_custom_mask_requires_path() {
        let config = Config {
            use_custom_mask: true,
            mask_path: PathBuf::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CloudError::Config(_))));
    }

    #[test]
    fn test_resolve_beside_executable_is_absolute() {
        // current_exe works under cargo test, so the resolved path should
        // live next to the test binary rather than in the CWD.
        let path = resolve_beside_executable("input.txt");
        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), "input.txt");
    }
}
