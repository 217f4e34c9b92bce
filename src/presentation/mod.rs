pub mod bootstrap;
pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use bootstrap::{ServingPipeline, initialize_pipeline, pipeline_initializer};
pub use config::{Environment, Settings, SettingsError};
pub use router::create_router;
pub use state::AppState;
