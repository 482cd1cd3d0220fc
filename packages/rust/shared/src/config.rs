//! Client configuration.
//!
//! All settings are passed in by the embedding application when the client
//! is built; nothing is read from files or environment variables.

use crate::error::{QnaMakerError, Result};

/// The West US public endpoint, used when no other endpoint is given.
pub const DEFAULT_ENDPOINT: &str = "https://westus.api.cognitive.microsoft.com/qnamaker/v2.0";

/// Connection settings for one knowledge base.
///
/// Fixed once the client is constructed; no operation mutates them.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Identifier of the knowledge base (the service GUID).
    pub kb_id: String,
    /// Subscription key sent on every request.
    pub subscription_key: String,
    /// Base service URL, e.g. `https://<region>.api.cognitive.microsoft.com/qnamaker/v2.0`.
    pub endpoint: String,
}

impl ClientConfig {
    /// Settings for `kb_id` against the default West US endpoint.
    pub fn new(kb_id: impl Into<String>, subscription_key: impl Into<String>) -> Self {
        Self {
            kb_id: kb_id.into(),
            subscription_key: subscription_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point at another region or deployment instead of the default.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Check the endpoint shape. The service publishes hosts of the form
    /// `https://<region>.api.cognitive.microsoft.com/qnamaker/v2.0`; anything
    /// without an HTTP scheme or the `qnamaker` path segment is rejected.
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http") || !self.endpoint.contains("qnamaker") {
            return Err(QnaMakerError::config(format!(
                "endpoint must start with \"http\" and contain \"qnamaker\", like {DEFAULT_ENDPOINT}. \
                 In your service settings at qnamaker.ai, open \"Publish\" and copy the host value \
                 from the sample HTTP request (got: {})",
                self.endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_validates() {
        let config = ClientConfig::new("4514ef7e-f6fb-44e8-a01f-29dc35dd2903", "key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_region_validates() {
        let config = ClientConfig::new("kb", "key")
            .with_endpoint("https://southeastasia.api.cognitive.microsoft.com/qnamaker/v2.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_scheme_is_rejected() {
        let config =
            ClientConfig::new("kb", "key").with_endpoint("westus.api.cognitive.microsoft.com/qnamaker/v2.0");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, QnaMakerError::Config { .. }));
        assert!(err.to_string().contains("qnamaker"));
    }

    #[test]
    fn foreign_host_is_rejected() {
        let config = ClientConfig::new("kb", "key").with_endpoint("https://example.com/v2.0");
        assert!(matches!(
            config.validate(),
            Err(QnaMakerError::Config { .. })
        ));
    }
}
