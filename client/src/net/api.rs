//! Browser transport for `POST /api/register`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR): a stub that always fails, since submissions only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures come back as `SubmitError` values and are turned into
//! user-facing text by the registration flow, never panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use registration::{BackendConfig, HttpReply, RegistrationApi, RegistrationInput, SubmitError};

/// Backend base URL baked in at build time via `BACKEND_URL`.
const BUILD_BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Resolve the backend configuration for this build.
///
/// An unusable `BACKEND_URL` falls back to the local development address.
pub fn backend_config() -> BackendConfig {
    resolve_backend_config(BUILD_BACKEND_URL)
}

fn resolve_backend_config(raw: Option<&str>) -> BackendConfig {
    BackendConfig::from_base_url(raw).unwrap_or_else(|_e| {
        #[cfg(feature = "hydrate")]
        log::warn!("{_e}; using default backend");
        BackendConfig::default()
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn timeout_millis(config: &BackendConfig) -> u32 {
    u32::try_from(config.request_timeout.as_millis()).unwrap_or(u32::MAX)
}

/// Posts registrations from the browser.
#[derive(Clone, Debug)]
pub struct BrowserApi {
    config: BackendConfig,
}

impl BrowserApi {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl RegistrationApi for BrowserApi {
    async fn post_registration(&self, input: &RegistrationInput) -> Result<HttpReply, SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let url = self.config.register_url();
            let send = async {
                let resp = gloo_net::http::Request::post(&url)
                    .json(input)
                    .map_err(|e| SubmitError::Transport(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;
                let status = resp.status();
                // An unreadable body still carries a meaningful status.
                let body = resp.text().await.unwrap_or_default();
                Ok::<_, SubmitError>(HttpReply { status, body })
            };
            let timeout = gloo_timers::future::TimeoutFuture::new(timeout_millis(&self.config));

            futures::pin_mut!(send, timeout);
            match select(send, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(SubmitError::Timeout(self.config.request_timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &self.config);
            Err(SubmitError::Transport("not available on server".to_owned()))
        }
    }
}
