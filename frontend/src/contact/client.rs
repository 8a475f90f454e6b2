use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::BackendConfig;
use crate::contact::models::{ContactEmailRequest, ContactEmailResponse};
use crate::error::SubmitError;

/// What came back from the email function, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReply {
    pub ok: bool,
    pub status: u16,
    pub body: Option<ContactEmailResponse>,
}

#[async_trait(?Send)]
pub trait EmailDispatch {
    async fn dispatch(&self, request: &ContactEmailRequest) -> Result<DispatchReply, SubmitError>;
}

/// Calls the hosted `send-contact-email` function over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionsClient {
    config: BackendConfig,
}

impl FunctionsClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self, SubmitError> {
        Ok(Self::new(BackendConfig::from_env()?))
    }
}

#[async_trait(?Send)]
impl EmailDispatch for FunctionsClient {
    async fn dispatch(&self, request: &ContactEmailRequest) -> Result<DispatchReply, SubmitError> {
        let key = self.config.public_key();
        let response = Request::post(&self.config.contact_endpoint())
            .header("Authorization", &format!("Bearer {}", key))
            .header("apikey", key)
            .json(request)
            .map_err(|e| SubmitError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        // An unreadable body is not fatal; the status alone decides then
        let body = match response.json::<ContactEmailResponse>().await {
            Ok(body) => Some(body),
            Err(e) => {
                log::warn!("Could not parse email function response ({}): {}", status, e);
                None
            }
        };

        Ok(DispatchReply { ok, status, body })
    }
}
