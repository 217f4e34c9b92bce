use std::sync::Arc;

use crate::application::ports::{LlmClient, Retriever};
use crate::application::services::{AnsweringService, QaContext};
use crate::presentation::config::Settings;

pub type QaPipeline<R, L> = AnsweringService<R, L>;

pub struct AppState<R, L>
where
    R: Retriever + ?Sized,
    L: LlmClient + ?Sized,
{
    pub qa: Arc<QaContext<QaPipeline<R, L>>>,
    pub settings: Arc<Settings>,
}

impl<R, L> AppState<R, L>
where
    R: Retriever + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(qa: Arc<QaContext<QaPipeline<R, L>>>, settings: Settings) -> Self {
        Self {
            qa,
            settings: Arc::new(settings),
        }
    }
}

impl<R, L> Clone for AppState<R, L>
where
    R: Retriever + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            qa: Arc::clone(&self.qa),
            settings: Arc::clone(&self.settings),
        }
    }
}
