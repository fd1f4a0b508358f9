//! Configuration for metalingo.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::translation::{Field, Language};
use crate::{LingoError, LingoResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "metalingo.toml";

/// Keyword that asks for target languages to be detected from the metadata folder.
pub const AUTO_LANGUAGES: &str = "AUTO";

/// Main configuration for metalingo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Translation run settings.
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Backend settings.
    #[serde(default)]
    pub backends: BackendsConfig,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Available translation backends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// translate-shell (`trans`), backed by Google, Bing, Yandex...
    TranslateShell,
    /// Any program that reads the text on stdin and prints the translation.
    Command,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::TranslateShell => write!(f, "translate_shell"),
            BackendKind::Command => write!(f, "command"),
        }
    }
}

/// Translation run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Backend used for translations.
    #[serde(default = "default_backend")]
    pub backend: BackendKind,

    /// Source language name (see the language catalog).
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target locale folders, or `["AUTO"]` to detect them.
    #[serde(default = "default_target_languages")]
    pub target_languages: Vec<String>,

    /// fastlane metadata folder.
    #[serde(default = "default_metadata_folder")]
    pub metadata_folder: PathBuf,

    /// Fields to translate (empty = all).
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    /// Timeout for a single backend call (in seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            source_language: default_source_language(),
            target_languages: default_target_languages(),
            metadata_folder: default_metadata_folder(),
            fields: default_fields(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_backend() -> BackendKind {
    BackendKind::TranslateShell
}

fn default_source_language() -> String {
    "English".to_string()
}

fn default_target_languages() -> Vec<String> {
    vec![AUTO_LANGUAGES.to_string()]
}

fn default_metadata_folder() -> PathBuf {
    PathBuf::from("./fastlane/metadata")
}

fn default_fields() -> Vec<String> {
    vec!["name".to_string(), "description".to_string()]
}

fn default_timeout() -> u64 {
    30
}

/// Backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendsConfig {
    /// translate-shell configuration.
    #[serde(default)]
    pub translate_shell: TranslateShellConfig,

    /// Custom command configuration.
    #[serde(default)]
    pub command: CommandConfig,
}

/// translate-shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateShellConfig {
    /// Command to execute.
    #[serde(default = "default_trans_command")]
    pub command: String,

    /// Translation engine (google, bing, yandex, apertium...).
    #[serde(default = "default_trans_engine")]
    pub engine: String,

    /// Extra arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for TranslateShellConfig {
    fn default() -> Self {
        Self {
            command: default_trans_command(),
            engine: default_trans_engine(),
            args: Vec::new(),
        }
    }
}

fn default_trans_command() -> String {
    "trans".to_string()
}

fn default_trans_engine() -> String {
    "google".to_string()
}

/// Custom command configuration.
///
/// `{source}` and `{target}` in the arguments are replaced by the language codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Command to execute.
    #[serde(default)]
    pub command: String,

    /// Arguments.
    #[serde(default = "default_command_args")]
    pub args: Vec<String>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            command: String::new(),
            args: default_command_args(),
        }
    }
}

fn default_command_args() -> Vec<String> {
    vec!["{source}".to_string(), "{target}".to_string()]
}

/// Translation cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Folder holding one file per language pair.
    #[serde(default = "default_cache_folder")]
    pub folder: PathBuf,

    /// Maximum entries per language pair.
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            folder: default_cache_folder(),
            capacity: default_cache_capacity(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_folder() -> PathBuf {
    PathBuf::from(".metalingo-cache")
}

fn default_cache_capacity() -> usize {
    1000
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> LingoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LingoError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> LingoResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            translation: TranslationConfig::default(),
            backends: BackendsConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Writes the default configuration, refusing to overwrite an existing file.
    pub fn create_initial<P: AsRef<Path>>(path: P) -> LingoResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(LingoError::ConfigExists(path.display().to_string()));
        }

        let config = Self::default_config();
        config.save(path)?;
        Ok(config)
    }

    /// Checks values that serde cannot check on its own.
    pub fn validate(&self) -> LingoResult<()> {
        if self.cache.capacity == 0 {
            return Err(LingoError::config("cache.capacity deve ser maior que zero"));
        }

        if self.translation.timeout_secs == 0 {
            return Err(LingoError::config(
                "translation.timeout_secs deve ser maior que zero",
            ));
        }

        Language::by_name(&self.translation.source_language)?;
        Field::fields_to_translate(&self.translation.fields)?;

        if self.translation.backend == BackendKind::Command
            && self.backends.command.command.trim().is_empty()
        {
            return Err(LingoError::config(
                "backends.command.command é obrigatório para o backend 'command'",
            ));
        }

        if !matches!(self.general.log_format.as_str(), "text" | "json") {
            return Err(LingoError::config(format!(
                "general.log_format inválido: '{}' (use text ou json)",
                self.general.log_format
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
