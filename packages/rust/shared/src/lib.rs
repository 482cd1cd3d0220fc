//! Shared error model, configuration, and wire types for the QnA Maker client.
//!
//! This crate is the foundation depended on by the client crate. It provides:
//! - [`QnaMakerError`] — the unified error type
//! - [`ClientConfig`] — connection settings fixed at construction
//! - Wire types ([`GenerateAnswerResponse`], [`KnowledgeBaseEdit`], ...)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{QnaMakerError, Result};
pub use types::{
    Answer, EditSection, GenerateAnswerRequest, GenerateAnswerResponse, KnowledgeBaseEdit, QnaPair,
};
