use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the system default cursor comes from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DefaultCursor {
    #[default]
    Builtin,
    Xcursor {
        path: PathBuf,
        #[serde(default = "default_xcursor_size")]
        size: u32,
    },
    /// Any image format the `image` crate can decode.
    Image {
        path: PathBuf,
        #[serde(default)]
        hot_x: i32,
        #[serde(default)]
        hot_y: i32,
    },
}

fn default_xcursor_size() -> u32 {
    24
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub default_cursor: DefaultCursor,
}

impl BackendConfig {
    /// `$XDG_CONFIG_HOME/fbcursor/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fbcursor").join("config.toml"))
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("Failed to write config {}", path.display()))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Load from `path`, treating a missing file as the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_is_builtin() {
        let config = BackendConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_cursor, DefaultCursor::Builtin);
    }

    #[test]
    fn test_parse_xcursor_source() {
        let config = BackendConfig::from_toml_str(
            r#"
            [default_cursor]
            source = "xcursor"
            path = "/usr/share/icons/Adwaita/cursors/left_ptr"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.default_cursor,
            DefaultCursor::Xcursor {
                path: PathBuf::from("/usr/share/icons/Adwaita/cursors/left_ptr"),
                size: 24,
            }
        );
    }

    #[test]
    fn test_parse_image_source() {
        let config = BackendConfig::from_toml_str(
            r#"
            [default_cursor]
            source = "image"
            path = "arrow.png"
            hot_x = 3
            "#,
        )
        .unwrap();

        assert_eq!(
            config.default_cursor,
            DefaultCursor::Image {
                path: PathBuf::from("arrow.png"),
                hot_x: 3,
                hot_y: 0,
            }
        );
    }

    #[test]
    fn test_unknown_source_rejected() {
        let result = BackendConfig::from_toml_str(
            r#"
            [default_cursor]
            source = "svg"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = BackendConfig {
            default_cursor: DefaultCursor::Xcursor {
                path: PathBuf::from("/tmp/left_ptr"),
                size: 32,
            },
        };
        config.save_to_file(&path).unwrap();

        assert_eq!(BackendConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = BackendConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BackendConfig::default());
    }

    #[test]
    fn test_default_path_under_config_dir() {
        match (BackendConfig::default_path(), dirs::config_dir()) {
            (Some(path), Some(dir)) => {
                assert!(path.starts_with(&dir));
                assert!(path.ends_with(Path::new("fbcursor").join("config.toml")));
            }
            (None, None) => {}
            other => panic!("default path disagrees with config dir: {:?}", other),
        }
    }
}
