use std::time::Duration;

use whodat::catalog::HttpGet;
use whodat::error::FetchError;

use crate::error::CliError;

pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new(timeout: Duration) -> Result<Self, CliError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("whodat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpGet for ReqwestHttp {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|e| FetchError::decode(url, e))
    }
}
