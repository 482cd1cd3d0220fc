//! HTTP client for Microsoft's QnA Maker service.
//!
//! This crate provides:
//! - [`AnswerClient`] — ask a question, get the best-ranked answer back,
//!   or push bulk knowledge-base edits
//! - [`FAILED_ANSWER`] — the sentinel answer the service returns when no
//!   confident match exists

pub mod client;

pub use client::{AnswerClient, FAILED_ANSWER};
pub use qnamaker_shared::{
    Answer, ClientConfig, DEFAULT_ENDPOINT, EditSection, GenerateAnswerRequest,
    GenerateAnswerResponse, KnowledgeBaseEdit, QnaMakerError, QnaPair, Result,
};
