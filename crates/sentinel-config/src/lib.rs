use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROJECT_FILE: &str = "sentinel.toml";

// ============================================================================
// Global Config (~/.config/sentinel/config.toml)
// ============================================================================

/// Global configuration for sentinel
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    /// Custom classifiers applied to every scan
    #[serde(default)]
    pub patterns: Vec<PatternDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print matched values next to detections
    #[serde(default)]
    pub show_values: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A named custom classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDefinition {
    pub name: String,
    pub pattern: String,
}

impl PatternDefinition {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Parse a `NAME=PATTERN` argument; the pattern may itself contain `=`
    pub fn parse_assignment(arg: &str) -> anyhow::Result<Self> {
        match arg.split_once('=') {
            Some((name, pattern)) if !name.trim().is_empty() => {
                Ok(Self::new(name.trim(), pattern))
            }
            _ => anyhow::bail!("Expected NAME=PATTERN, got '{}'", arg),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_values: false,
        }
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "sentinel", "sentinel") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.sentinel/config.toml")
        }
    }
}

// ============================================================================
// Project Config (sentinel.toml)
// ============================================================================

/// Project-level configuration (sentinel.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Custom classifiers for scans run inside this project
    #[serde(default)]
    pub patterns: Vec<PatternDefinition>,
}

impl ProjectConfig {
    /// Find and load sentinel.toml from current or parent directories
    pub fn find_and_load() -> anyhow::Result<Option<(PathBuf, Self)>> {
        let current = std::env::current_dir()?;
        Self::find_and_load_from(&current)
    }

    pub fn find_and_load_from(start: &Path) -> anyhow::Result<Option<(PathBuf, Self)>> {
        if let Some(root) = Self::find_project_root_from(start) {
            let config = Self::load(&root)?;
            Ok(Some((root, config)))
        } else {
            Ok(None)
        }
    }

    /// Find sentinel.toml by walking up from given directory
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Load sentinel.toml from project root
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let path = project_root.join(PROJECT_FILE);
        let content = std::fs::read_to_string(&path)?;
        let config: ProjectConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save sentinel.toml to project root
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        let path = project_root.join(PROJECT_FILE);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Layer custom patterns: global, then project, then command line.
///
/// Order is preserved; the registry merge replaces repeated names in place.
pub fn layered_patterns(
    global: &Config,
    project: Option<&ProjectConfig>,
    cli: &[PatternDefinition],
) -> Vec<(String, String)> {
    global
        .patterns
        .iter()
        .chain(project.into_iter().flat_map(|p| p.patterns.iter()))
        .chain(cli.iter())
        .map(|def| (def.name.clone(), def.pattern.clone()))
        .collect()
}
