mod ask;
mod health;
mod info;

pub use ask::{AskRequest, AskResponse, ErrorResponse, ask_handler};
pub use health::{HealthResponse, health_handler};
pub use info::{InfoResponse, info_handler};
