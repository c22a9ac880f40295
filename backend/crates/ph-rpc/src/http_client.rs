use crate::{
    AttachContentRequest, ProfileRpcClient, RpcError, RpcResult, StartRequest, StopRequest,
};

use ph_config::RpcConfig;
use ph_core::{ProfileRef, RpcOutcome};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Serialize;

/// `ProfileRpcClient` speaking JSON over HTTP to the profile server.
pub struct HttpProfileRpcClient {
    base_url: String,
    timeout: Duration,
    client: ReqwestClient,
}

impl HttpProfileRpcClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Profile server URL (e.g., "http://127.0.0.1:9000")
    /// * `timeout` - Upper bound on each request, connect included
    pub fn new(base_url: &str, timeout: Duration) -> RpcResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    pub fn from_config(config: &RpcConfig) -> RpcResult<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    fn url(&self, profile: &ProfileRef, action: &str) -> String {
        format!(
            "{}/profiles/{}/{}",
            self.base_url,
            urlencoding::encode(&profile.name),
            action
        )
    }

    async fn post<B: Serialize + Sync>(&self, url: String, body: &B) -> RpcResult<RpcOutcome> {
        log::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            log::debug!("Profile server answered {} for {}", status, url);
            return Err(RpcError::status(status.as_u16()));
        }

        response.json::<RpcOutcome>().await.map_err(RpcError::decode)
    }
}

#[async_trait]
impl ProfileRpcClient for HttpProfileRpcClient {
    async fn attach_content(
        &self,
        profile: &ProfileRef,
        content_id: &str,
        target_location: &str,
    ) -> RpcResult<RpcOutcome> {
        let body = AttachContentRequest {
            name: profile.name.clone(),
            file_uuid: content_id.to_string(),
            host_url: target_location.to_string(),
        };
        self.post(self.url(profile, "host-file"), &body).await
    }

    async fn stop(&self, profile: &ProfileRef) -> RpcResult<RpcOutcome> {
        let body = StopRequest {
            name: profile.name.clone(),
        };
        self.post(self.url(profile, "stop"), &body).await
    }

    async fn start(&self, profile: &ProfileRef) -> RpcResult<RpcOutcome> {
        let body = StartRequest {
            name: profile.name.clone(),
        };
        self.post(self.url(profile, "start"), &body).await
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
