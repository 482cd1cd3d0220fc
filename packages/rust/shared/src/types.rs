//! Wire types for the generate-answer and knowledge-base-update endpoints.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generate answer
// ---------------------------------------------------------------------------

/// Body of a generate-answer request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAnswerRequest {
    /// The question asked by the user. Forwarded as-is, even when empty.
    pub question: String,
}

/// Validated shape of a generate-answer response.
///
/// `answers` is ordered highest-confidence first by the service; the rank
/// is never recomputed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAnswerResponse {
    pub answers: Vec<Answer>,
}

/// One candidate answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The answer text.
    pub answer: String,
    /// Confidence score reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// The stored questions this answer was matched against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Knowledge base edits
// ---------------------------------------------------------------------------

/// Bulk edit request for a knowledge base. Passed through to the service
/// unvalidated; absent sections are omitted from the JSON entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBaseEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add: Option<EditSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<EditSection>,
}

/// One side of an edit: question/answer pairs and/or source URLs to ingest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qna_pairs: Option<Vec<QnaPair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
}

/// A stored question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QnaPair {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_response_decodes_service_shape() {
        let json = r#"{
            "answers": [
                {"answer": "Hello, How can I help you?", "questions": ["Hello"], "score": 100.0},
                {"answer": "second choice", "score": 12.5}
            ]
        }"#;

        let parsed: GenerateAnswerResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.answers.len(), 2);
        assert_eq!(parsed.answers[0].answer, "Hello, How can I help you?");
        assert_eq!(parsed.answers[0].score, Some(100.0));
        assert_eq!(parsed.answers[1].questions, None);
    }

    #[test]
    fn answer_response_rejects_missing_answers() {
        let json = r#"{"error": {"code": "Unauthorized"}}"#;
        assert!(serde_json::from_str::<GenerateAnswerResponse>(json).is_err());
    }

    #[test]
    fn edit_serializes_with_service_field_names() {
        let edit = KnowledgeBaseEdit {
            add: Some(EditSection {
                qna_pairs: Some(vec![QnaPair {
                    question: "Hello".into(),
                    answer: "Hello, How can I help you?".into(),
                }]),
                urls: None,
            }),
            delete: None,
        };

        let json = serde_json::to_string(&edit).expect("serialize");
        assert!(json.contains(r#""qnaPairs""#));
        // Absent sections and fields stay off the wire.
        assert!(!json.contains("delete"));
        assert!(!json.contains("urls"));
    }

    #[test]
    fn edit_roundtrip() {
        let json = r#"{
            "add": {
                "qnaPairs": [{"answer": "a", "question": "q"}],
                "urls": ["https://docs.example.com/faq"]
            },
            "delete": {
                "qnaPairs": [{"answer": "old", "question": "stale"}]
            }
        }"#;

        let parsed: KnowledgeBaseEdit = serde_json::from_str(json).expect("deserialize");
        let add = parsed.add.as_ref().expect("add section");
        assert_eq!(add.urls.as_deref(), Some(&["https://docs.example.com/faq".to_string()][..]));
        assert_eq!(parsed.delete.as_ref().and_then(|d| d.qna_pairs.as_ref()).map(Vec::len), Some(1));

        let back = serde_json::to_value(&parsed).expect("serialize");
        assert_eq!(back["add"]["qnaPairs"][0]["question"], "q");
    }
}
