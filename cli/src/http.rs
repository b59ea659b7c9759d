//! `reqwest` transport for the registration service.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use registration::{BackendConfig, HealthStatus, HttpReply, Registration, RegistrationApi, RegistrationInput, SubmitError};

use crate::CliError;

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub(crate) struct HttpApi {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpApi {
    pub(crate) fn new(config: BackendConfig) -> Result<Self, CliError> {
        let client = reqwest::Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    pub(crate) fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub(crate) async fn list_registrations(&self) -> Result<Vec<Registration>, CliError> {
        let resp = self.client.get(self.config.registrations_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CliError::Status { status: status.as_u16(), body: resp.text().await.unwrap_or_default() });
        }
        Ok(resp.json().await?)
    }

    pub(crate) async fn health(&self) -> Result<HealthStatus, CliError> {
        let resp = self.client.get(self.config.health_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CliError::Status { status: status.as_u16(), body: resp.text().await.unwrap_or_default() });
        }
        Ok(resp.json().await?)
    }
}

impl RegistrationApi for HttpApi {
    async fn post_registration(&self, input: &RegistrationInput) -> Result<HttpReply, SubmitError> {
        let resp = self
            .client
            .post(self.config.register_url())
            .json(input)
            .send()
            .await
            .map_err(|e| submit_error(&e, &self.config))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Ok(HttpReply { status, body })
    }
}

fn submit_error(err: &reqwest::Error, config: &BackendConfig) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout(config.request_timeout)
    } else {
        SubmitError::Transport(err.to_string())
    }
}
