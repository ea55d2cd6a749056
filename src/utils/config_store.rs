//! ConfigStore - Theme File Location

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config::ThemeConfig;
use crate::error::{Error, Result};

/// File name of the theme inside the config directory
pub const THEME_FILE: &str = "theme.toml";

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/glint-ui/`
/// - **macOS**: `~/Library/Application Support/dev.glint.glint-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\glint\glint-ui\config\`
pub fn config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "glint", "glint-ui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let dir = project_dirs.config_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Path of the default theme file
pub fn theme_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(THEME_FILE))
}

/// Load the theme from the default location
pub fn load_theme() -> Result<ThemeConfig> {
    load_theme_from(&theme_path()?)
}

/// Load the theme from `path`
///
/// A missing file yields the built-in theme.
pub fn load_theme_from(path: &Path) -> Result<ThemeConfig> {
    if !path.exists() {
        tracing::debug!("No theme file at {}, using defaults", path.display());
        return Ok(ThemeConfig::default());
    }
    tracing::info!("Loading theme from {}", path.display());
    ThemeConfig::load(path)
}

/// Save the theme to the default location
pub fn save_theme(theme: &ThemeConfig) -> Result<()> {
    save_theme_to(theme, &theme_path()?)
}

/// Save the theme to `path`, creating its parent directory if needed
pub fn save_theme_to(theme: &ThemeConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        fs::create_dir_all(parent)?;
    }
    theme.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glint-store-{name}-{}", std::process::id()))
    }

    #[test]
    fn missing_file_yields_default_theme() {
        let path = scratch_dir("missing").join(THEME_FILE);
        assert!(!path.exists());
        assert_eq!(load_theme_from(&path).expect("load"), ThemeConfig::default());
    }

    #[test]
    fn saved_theme_loads_back() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join(THEME_FILE);
        let mut theme = ThemeConfig::default();
        theme.motion.stagger_step = 0.25;
        theme.palette = vec!["#123456".to_string()];

        save_theme_to(&theme, &path).expect("save");
        let loaded = load_theme_from(&path);
        let _ = fs::remove_dir_all(&dir);
        assert_eq!(loaded.expect("load"), theme);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = scratch_dir("malformed");
        let path = dir.join(THEME_FILE);
        fs::create_dir_all(&dir).expect("dir");
        fs::write(&path, "radius = [").expect("write");
        let loaded = load_theme_from(&path);
        let _ = fs::remove_dir_all(&dir);
        assert!(matches!(loaded, Err(Error::TomlDe { .. })));
    }
}
