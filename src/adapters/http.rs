use std::time::Duration;

use reqwest::Client;

use crate::domain::ports::CodeDataSource;
use crate::utils::error::{JlgError, Result};

/// HTTP implementation of [`CodeDataSource`].
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    endpoint: String,
}

impl HttpDataSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CodeDataSource for HttpDataSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Fetching reference data from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Response status: {}", response.status());
        if !response.status().is_success() {
            return Err(JlgError::DataSource {
                message: format!(
                    "unexpected status {} from {}",
                    response.status(),
                    self.endpoint
                ),
            });
        }

        Ok(response.text().await?)
    }
}
