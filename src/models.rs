use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Asset;

const SEEDS_FILE: &str = "seeds.json";

/// Three colors that always travel together.
pub type Palette = [String; 3];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreativeIdea {
    pub title: String,
    pub description: String,
    pub mood: String,
    pub focus: String,
    pub palette: Palette,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardStatus {
    #[default]
    Idle,
    Copied,
    Error,
}

impl ClipboardStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClipboardStatus::Idle => "Copy prompt",
            ClipboardStatus::Copied => "Copied!",
            ClipboardStatus::Error => "Copy failed",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedsError {
    #[error("vocabulary pool `{0}` is empty")]
    EmptyPool(&'static str),
    #[error("vocabulary pool `{0}` contains a blank entry")]
    BlankEntry(&'static str),
    #[error("palette color `{0}` is not a #rrggbb hex value")]
    BadColor(String),
}

/// The closed vocabularies every idea is drawn from.
#[derive(Debug, Deserialize, Clone)]
pub struct IdeaSeeds {
    pub verbs: Vec<String>,
    pub subjects: Vec<String>,
    pub moods: Vec<String>,
    pub focuses: Vec<String>,
    pub tools: Vec<String>,
    pub palettes: Vec<Palette>,
}

impl IdeaSeeds {
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(SEEDS_FILE)
            .context(format!("Could not find embedded vocabulary file: {}", SEEDS_FILE))?;
        let raw = std::str::from_utf8(file.data.as_ref())?;
        Self::from_json(raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let seeds: IdeaSeeds =
            serde_json::from_str(raw).context("Could not parse vocabulary file")?;
        seeds.validate()?;
        Ok(seeds)
    }

    pub fn validate(&self) -> Result<(), SeedsError> {
        let word_pools: [(&'static str, &Vec<String>); 5] = [
            ("verbs", &self.verbs),
            ("subjects", &self.subjects),
            ("moods", &self.moods),
            ("focuses", &self.focuses),
            ("tools", &self.tools),
        ];

        for (name, pool) in word_pools {
            if pool.is_empty() {
                return Err(SeedsError::EmptyPool(name));
            }
            if pool.iter().any(|w| w.trim().is_empty()) {
                return Err(SeedsError::BlankEntry(name));
            }
        }

        if self.palettes.is_empty() {
            return Err(SeedsError::EmptyPool("palettes"));
        }
        for color in self.palettes.iter().flatten() {
            if !is_hex_color(color) {
                return Err(SeedsError::BadColor(color.clone()));
            }
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"{
        "verbs": ["Remix"],
        "subjects": ["quiet cities"],
        "moods": ["Calm"],
        "focuses": ["noticing"],
        "tools": ["haptics"],
        "palettes": [["#000000", "#ffffff", "#ABCDEF"]]
    }"##;

    #[test]
    fn embedded_seeds_load_and_validate() {
        let seeds = IdeaSeeds::embedded().unwrap();
        assert_eq!(seeds.verbs.len(), 10);
        assert_eq!(seeds.moods.len(), 6);
        assert_eq!(seeds.palettes.len(), 6);
    }

    #[test]
    fn minimal_json_is_accepted() {
        let seeds = IdeaSeeds::from_json(MINIMAL).unwrap();
        assert_eq!(seeds.palettes[0][2], "#ABCDEF");
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut seeds = IdeaSeeds::from_json(MINIMAL).unwrap();
        seeds.tools.clear();
        assert_eq!(seeds.validate(), Err(SeedsError::EmptyPool("tools")));
    }

    #[test]
    fn blank_word_is_rejected() {
        let mut seeds = IdeaSeeds::from_json(MINIMAL).unwrap();
        seeds.moods.push("  ".to_string());
        assert_eq!(seeds.validate(), Err(SeedsError::BlankEntry("moods")));
    }

    #[test]
    fn malformed_color_is_rejected() {
        let mut seeds = IdeaSeeds::from_json(MINIMAL).unwrap();
        seeds.palettes[0][1] = "blue".to_string();
        assert_eq!(
            seeds.validate(),
            Err(SeedsError::BadColor("blue".to_string()))
        );
    }

    #[test]
    fn palette_must_be_a_triple() {
        let raw = MINIMAL.replace(r##"["#000000", "#ffffff", "#ABCDEF"]"##, r##"["#000000"]"##);
        assert!(IdeaSeeds::from_json(&raw).is_err());
    }

    #[test]
    fn status_labels() {
        assert_eq!(ClipboardStatus::default(), ClipboardStatus::Idle);
        assert_eq!(ClipboardStatus::Idle.label(), "Copy prompt");
        assert_eq!(ClipboardStatus::Copied.label(), "Copied!");
        assert_eq!(ClipboardStatus::Error.label(), "Copy failed");
    }
}
