use std::env;
use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_EMBEDDING_BATCH_SIZE, DEFAULT_PROMPT_TEMPLATE, DEFAULT_PROMPT_TOKEN_WARNING,
    DEFAULT_TOP_K, PromptTemplate,
};
use crate::domain::DEFAULT_PREVIEW_CHARS;
use crate::infrastructure::llm::{DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL};
use crate::infrastructure::text_processing::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub index: IndexSettings,
    pub chunking: ChunkingSettings,
    pub embeddings: EmbeddingsSettings,
    pub llm: LlmSettings,
    pub rag: RagSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Defer pipeline initialization to the first question instead of startup.
    pub lazy_init: bool,
    pub static_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            lazy_init: false,
            static_dir: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    pub dir: PathBuf,
    pub source_document: PathBuf,
    /// Build an in-memory index from `source_document` when no files exist.
    pub build_if_missing: bool,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("faiss_index"),
            source_document: PathBuf::from("document.pdf"),
            build_if_missing: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingsSettings {
    pub model: String,
    pub batch_size: usize,
}

impl Default for EmbeddingsSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            batch_size: DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub chat_model: String,
    pub temperature: f32,
    pub max_tokens: Option<usize>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            temperature: 0.0,
            max_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RagSettings {
    pub top_k: usize,
    pub prompt_template: String,
    pub preview_chars: usize,
    pub prompt_token_warning: usize,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            prompt_token_warning: DEFAULT_PROMPT_TOKEN_WARNING,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    Environment(String),
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("OPENAI_API_KEY environment variable is required")]
    MissingApiKey,
}

impl Settings {
    /// Layers, lowest first: defaults, `appsettings.{env}`, `APP__*` variables,
    /// then `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `FAISS_INDEX_DIR` and `PORT`.
    pub fn load() -> Result<(Self, Environment), SettingsError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env().map_err(SettingsError::Environment)?;

        let configuration = Config::builder()
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", non_empty_var("OPENAI_API_KEY"))?
            .set_override_option("llm.base_url", non_empty_var("OPENAI_BASE_URL"))?
            .set_override_option("index.dir", non_empty_var("FAISS_INDEX_DIR"))?
            .set_override_option("server.port", non_empty_var("PORT"))?
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;

        Ok((settings, environment))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rag.top_k == 0 {
            return Err(SettingsError::Invalid("rag.top_k must be at least 1".into()));
        }
        if self.chunking.chunk_size == 0 {
            return Err(SettingsError::Invalid(
                "chunking.chunk_size must be at least 1".into(),
            ));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(SettingsError::Invalid(format!(
                "chunking.chunk_overlap ({}) must be smaller than chunking.chunk_size ({})",
                self.chunking.chunk_overlap, self.chunking.chunk_size
            )));
        }
        if self.embeddings.batch_size == 0 {
            return Err(SettingsError::Invalid(
                "embeddings.batch_size must be at least 1".into(),
            ));
        }
        PromptTemplate::new(self.rag.prompt_template.clone())
            .map_err(|e| SettingsError::Invalid(e.to_string()))?;

        Ok(())
    }

    pub fn api_key(&self) -> Result<&str, SettingsError> {
        self.llm
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(SettingsError::MissingApiKey)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

