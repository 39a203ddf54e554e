use crate::domain::error::AstroError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::storage::cache::RecordCache;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RecordCache>,
    pub config: Arc<RwLock<Config>>,
    pub http_client: Client,
}

impl AppState {
    pub fn new(cache: RecordCache, config: Config) -> Result<Self, AstroError> {
        let http_client = create_client(config.http.timeout_secs)?;

        Ok(Self {
            cache: Arc::new(cache),
            config: Arc::new(RwLock::new(config)),
            http_client,
        })
    }
}
