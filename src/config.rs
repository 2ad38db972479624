use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::Path;

// missing keys fall back field by field to `Theme::default()`
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    pub bg: String,      // background
    pub main: String,    // brand color, prompt title, shuffle hint
    pub text: String,    // idea body text
    pub sub: String,     // labels and history entries
    #[serde(alias = "subAlt", alias = "subalt")]
    pub sub_alt: String, // borders and footer
    pub success: String, // "Copied!"
    pub error: String,   // "Copy failed"
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#020617".to_string(),
            main: "#7dd3fc".to_string(),
            text: "#f1f5f9".to_string(),
            sub: "#94a3b8".to_string(),
            sub_alt: "#334155".to_string(),
            success: "#34d399".to_string(),
            error: "#f87171".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "studio-pulse") {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                builder = builder.add_source(File::from(config_path));
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::from(path))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_fill_a_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nmain = \"#ff6ff0\"\n").unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.theme.main, "#ff6ff0");
        assert_eq!(cfg.theme.bg, Theme::default().bg);
        assert_eq!(cfg.theme.sub_alt, Theme::default().sub_alt);
    }

    #[test]
    fn camel_case_sub_alt_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nsubAlt = \"#111827\"\n").unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.theme.sub_alt, "#111827");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme\nmain = ").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn snake_case_sub_alt_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nsub_alt = \"#111827\"\n").unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.theme.sub_alt, "#111827");
        assert_eq!(cfg.theme.main, Theme::default().main);
    }

    #[test]
    fn empty_file_gives_the_default_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.theme, Theme::default());
    }
}
