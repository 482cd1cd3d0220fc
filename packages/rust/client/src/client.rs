//! The answer client: one HTTP request per operation, no retries, no state.
//!
//! Each operation is an independent request/response cycle ending in either
//! a success value or a classified error. Rate limiting, retries, and
//! caching are left to the embedding application.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use qnamaker_shared::{
    ClientConfig, GenerateAnswerRequest, GenerateAnswerResponse, KnowledgeBaseEdit, QnaMakerError,
    Result,
};

/// Answer text the service returns when no confident match exists.
///
/// A response carrying this text is a *successful* result; the client does
/// not special-case it. Compare against this constant to detect "no match".
pub const FAILED_ANSWER: &str = "No good match found in the KB";

/// Code returned by [`AnswerClient::update_knowledge_base`] when the service
/// acknowledges an edit with an empty body.
const UPDATE_DONE: &str = "00";

/// Header carrying the subscription key on every request.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// User-Agent string for service requests.
const USER_AGENT: &str = concat!("qnamaker-client/", env!("CARGO_PKG_VERSION"));

/// Client for one hosted knowledge base.
///
/// Holds no mutable state; every method takes `&self`, so any number of
/// calls may be in flight concurrently against one instance.
pub struct AnswerClient {
    config: ClientConfig,
    client: Client,
}

impl AnswerClient {
    /// Build a client for the knowledge base described by `config`.
    ///
    /// Validates the endpoint and constructs the HTTP client. No network
    /// call happens here, and no explicit timeout is configured; the
    /// transport default governs worst-case latency.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| QnaMakerError::transport("failed to build HTTP client", e))?;

        Ok(Self { config, client })
    }

    /// Send `question` to the service and return the parsed response body
    /// unmodified.
    ///
    /// The question is forwarded as-is, even when empty. The HTTP status
    /// code is not inspected; the service reports problems in the body.
    #[instrument(skip_all, fields(kb_id = %self.config.kb_id))]
    pub async fn fetch_raw_answer(&self, question: &str) -> Result<Value> {
        let url = format!(
            "{}/knowledgebases/{}/generateAnswer",
            self.config.endpoint, self.config.kb_id
        );
        debug!(%url, "asking the knowledge base");

        let body = GenerateAnswerRequest {
            question: question.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| QnaMakerError::transport(format!("{url}: request failed"), e))?;

        let text = response
            .text()
            .await
            .map_err(|e| QnaMakerError::transport(format!("{url}: failed to read body"), e))?;

        serde_json::from_str(&text).map_err(|e| {
            QnaMakerError::invalid_response(
                format!("response body is not JSON: {e}"),
                Value::String(text),
            )
        })
    }

    /// Send `question` to the service and return the highest-ranked answer
    /// text, without any metadata.
    ///
    /// Fails with an invalid-response error when the body carries no
    /// `answers` list or an empty one; never a guess, never an empty
    /// string. The rejected payload rides along on the error.
    pub async fn fetch_best_answer(&self, question: &str) -> Result<String> {
        let raw = self.fetch_raw_answer(question).await?;

        let decoded: GenerateAnswerResponse = match serde_json::from_value(raw.clone()) {
            Ok(decoded) => decoded,
            Err(_) => {
                debug!(payload = %raw, "generate-answer response did not decode");
                return Err(QnaMakerError::invalid_response(
                    "no answer field present",
                    raw,
                ));
            }
        };

        match decoded.answers.into_iter().next() {
            Some(best) => Ok(best.answer),
            None => {
                debug!(payload = %raw, "generate-answer response contained no answers");
                Err(QnaMakerError::invalid_response(
                    "no answer field present",
                    raw,
                ))
            }
        }
    }

    /// Push a bulk edit to the knowledge base and return the raw response
    /// body: `None` when the service answered with an empty body, otherwise
    /// the body parsed as JSON (or the raw text when it is not JSON).
    #[instrument(skip_all, fields(kb_id = %self.config.kb_id))]
    pub async fn update_raw_knowledge_base(
        &self,
        edit: &KnowledgeBaseEdit,
    ) -> Result<Option<Value>> {
        let url = format!(
            "{}/knowledgebases/{}",
            self.config.endpoint, self.config.kb_id
        );
        debug!(%url, "sending knowledge base edit");

        let response = self
            .client
            .patch(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key)
            .json(edit)
            .send()
            .await
            .map_err(|e| QnaMakerError::transport(format!("{url}: request failed"), e))?;

        let text = response
            .text()
            .await
            .map_err(|e| QnaMakerError::transport(format!("{url}: failed to read body"), e))?;

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text).unwrap_or(Value::String(text))))
    }

    /// Push a bulk edit and normalize the outcome: `"00"` on success.
    ///
    /// The service signals a completed edit with an empty body, so success
    /// is defined by body absence: any body at all is classified as an
    /// invalid response carrying that payload. Whether the service can ever
    /// return a non-empty acknowledgement on a successful edit is an open
    /// question of its contract; this mapping would misread that as failure.
    pub async fn update_knowledge_base(&self, edit: &KnowledgeBaseEdit) -> Result<String> {
        match self.update_raw_knowledge_base(edit).await? {
            None => Ok(UPDATE_DONE.to_string()),
            Some(payload) => {
                debug!(payload = %payload, "knowledge base update returned a body");
                Err(QnaMakerError::invalid_response(
                    "unexpected body from knowledge base update",
                    payload,
                ))
            }
        }
    }
}
