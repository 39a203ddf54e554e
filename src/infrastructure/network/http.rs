// HTTP client utilities
use crate::domain::error::AstroError;
use reqwest::Client;

/// Create the shared HTTP client. The timeout bounds every backend
/// call (generation and translation alike).
pub fn create_client(timeout_secs: u64) -> Result<Client, AstroError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent("astro/0.1.0")
        .build()?)
}
