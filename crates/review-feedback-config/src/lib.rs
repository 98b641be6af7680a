use review_feedback_engine::UploadFilter;
use review_feedback_engine::project::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILES,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Completion backend the review text is sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    Ollama,
    LmStudio,
}

impl AiProvider {
    pub const ALL: [AiProvider; 3] = [AiProvider::Gemini, AiProvider::Ollama, AiProvider::LmStudio];

    pub fn display_name(self) -> &'static str {
        match self {
            AiProvider::Gemini => "Gemini (Cloud)",
            AiProvider::Ollama => "Ollama (Local)",
            AiProvider::LmStudio => "LM Studio (Local)",
        }
    }
}

/// Endpoint and model name for a local OpenAI-compatible server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub url: String,
    pub model: String,
}

impl ProviderConfig {
    pub fn ollama_default() -> Self {
        Self {
            url: "http://localhost:11434/v1/chat/completions".to_string(),
            model: "llama3".to_string(),
        }
    }

    pub fn lmstudio_default() -> Self {
        Self {
            url: "http://localhost:1234/v1/chat/completions".to_string(),
            model: "local-model".to_string(),
        }
    }
}

/// Which project files are uploaded for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSettings {
    pub allowed_extensions: Vec<String>,
    pub ignored_dirs: Vec<String>,
    pub ignored_files: Vec<String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            allowed_extensions: to_owned(DEFAULT_ALLOWED_EXTENSIONS),
            ignored_dirs: to_owned(DEFAULT_IGNORED_DIRS),
            ignored_files: to_owned(DEFAULT_IGNORED_FILES),
        }
    }
}

impl From<&UploadSettings> for UploadFilter {
    fn from(settings: &UploadSettings) -> Self {
        UploadFilter {
            allowed_extensions: settings.allowed_extensions.clone(),
            ignored_dirs: settings.ignored_dirs.clone(),
            ignored_files: settings.ignored_files.clone(),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Splits user-entered list text on newlines and commas, dropping blanks.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialConfig")]
pub struct Config {
    pub provider: AiProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_path: Option<PathBuf>,
    pub ollama: ProviderConfig,
    pub lmstudio: ProviderConfig,
    pub project_upload: UploadSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            gemini_api_key: None,
            project_path: None,
            ollama: ProviderConfig::ollama_default(),
            lmstudio: ProviderConfig::lmstudio_default(),
            project_upload: UploadSettings::default(),
        }
    }
}

// On-disk shape: every key optional, missing keys fall back to defaults
// one field at a time.
#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialConfig {
    provider: Option<AiProvider>,
    gemini_api_key: Option<String>,
    project_path: Option<PathBuf>,
    ollama: PartialProvider,
    lmstudio: PartialProvider,
    project_upload: PartialUploadSettings,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialProvider {
    url: Option<String>,
    model: Option<String>,
}

impl PartialProvider {
    fn or(self, base: ProviderConfig) -> ProviderConfig {
        ProviderConfig {
            url: self.url.unwrap_or(base.url),
            model: self.model.unwrap_or(base.model),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialUploadSettings {
    allowed_extensions: Option<Vec<String>>,
    ignored_dirs: Option<Vec<String>>,
    ignored_files: Option<Vec<String>>,
}

impl From<PartialConfig> for Config {
    fn from(partial: PartialConfig) -> Self {
        let defaults = Config::default();
        let upload = partial.project_upload;
        Self {
            provider: partial.provider.unwrap_or(defaults.provider),
            gemini_api_key: partial.gemini_api_key.filter(|k| !k.is_empty()),
            project_path: partial.project_path,
            ollama: partial.ollama.or(defaults.ollama),
            lmstudio: partial.lmstudio.or(defaults.lmstudio),
            project_upload: UploadSettings {
                allowed_extensions: upload
                    .allowed_extensions
                    .unwrap_or(defaults.project_upload.allowed_extensions),
                ignored_dirs: upload
                    .ignored_dirs
                    .unwrap_or(defaults.project_upload.ignored_dirs),
                ignored_files: upload
                    .ignored_files
                    .unwrap_or(defaults.project_upload.ignored_files),
            },
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded project path
        config.project_path = config
            .project_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, or defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/review-feedback");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Settings for the currently selected local provider, if it is one.
    pub fn provider_config(&self) -> Option<&ProviderConfig> {
        match self.provider {
            AiProvider::Gemini => None,
            AiProvider::Ollama => Some(&self.ollama),
            AiProvider::LmStudio => Some(&self.lmstudio),
        }
    }

    pub fn upload_filter(&self) -> UploadFilter {
        UploadFilter::from(&self.project_upload)
    }

    pub fn reset_project_upload(&mut self) {
        self.project_upload = UploadSettings::default();
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
