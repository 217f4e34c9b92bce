mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VARIABLE, Environment};
pub use settings::{
    ChunkingSettings, EmbeddingsSettings, IndexSettings, LlmSettings, LoggingSettings,
    RagSettings, ServerSettings, Settings, SettingsError,
};
