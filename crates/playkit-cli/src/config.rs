use crate::types::ColorChoice;
use anyhow::{Context, Result, anyhow};
use playkit_types::DiceSpec;
use playkit_types::range::{DICE_COUNT, DICE_SIDES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PLAYKIT_CONFIG";
const MAX_PRECISION: usize = 10;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PLAYKIT_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.playkit/config.toml
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("playkit").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".playkit").join("config.toml"));
    }

    Err(anyhow!(
        "Could not determine config path: no HOME directory or config directory found"
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    pub count: u32,
    pub sides: u32,
    pub save_history: bool,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            count: DICE_COUNT.default,
            sides: DICE_SIDES.default,
            save_history: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for area and perimeter
    pub precision: usize,
    pub color: ColorChoice,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            color: ColorChoice::Auto,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dice: DiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.default_dice()?;
        if self.display.precision > MAX_PRECISION {
            return Err(anyhow!(
                "display.precision must be at most {} (got {})",
                MAX_PRECISION,
                self.display.precision
            ));
        }
        Ok(())
    }

    /// Dice settings from the `[dice]` table
    pub fn default_dice(&self) -> Result<DiceSpec> {
        DiceSpec::new(self.dice.count, self.dice.sides).context("Invalid [dice] settings in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dice.count, 2);
        assert_eq!(config.dice.sides, 6);
        assert!(config.dice.save_history);
        assert_eq!(config.display.precision, 3);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dice]\nsides = 20\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.dice.sides, 20);
        assert_eq!(config.dice.count, 2);
        assert_eq!(config.display.color, ColorChoice::Auto);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");
        let mut config = Config::default();
        config.dice.save_history = false;
        config.display.color = ColorChoice::Never;

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_out_of_range_dice_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dice]\ncount = 50\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("count must be between 1 and 20"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
