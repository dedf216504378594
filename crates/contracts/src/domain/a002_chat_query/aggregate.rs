use crate::domain::common::ServerReply;
use serde::{Deserialize, Serialize};

pub const QUERY_PATH: &str = "/query";

/// Body of `POST /query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response of `POST /query`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
    /// Relative URL of a generated file to preview (e.g. `/static/outputs/deck.pdf`).
    #[serde(default)]
    pub file_url: Option<String>,
    /// Relative URL to download instead of `file_url`, when they differ.
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply for QueryResponse {
    fn error_field(&self) -> Option<&str> {
        self.error.as_deref()
    }
    fn status_field(&self) -> Option<&str> {
        self.status.as_deref()
    }
    fn message_field(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// What the chat should render for a decoded query response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Server-reported application error, to be shown verbatim.
    Failed(String),
    Answer(String),
    AnswerWithFile {
        answer: String,
        file_url: String,
        download_url: Option<String>,
    },
}

impl QueryResponse {
    pub fn into_outcome(self) -> QueryOutcome {
        if let Some(err) = self.server_error() {
            return QueryOutcome::Failed(err);
        }
        let answer = self.answer.unwrap_or_default();
        match self.file_url.filter(|u| !u.is_empty()) {
            Some(file_url) => QueryOutcome::AnswerWithFile {
                answer,
                file_url,
                download_url: self.download_url.filter(|u| !u.is_empty()),
            },
            None => QueryOutcome::Answer(answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(json: &str) -> QueryOutcome {
        serde_json::from_str::<QueryResponse>(json)
            .unwrap()
            .into_outcome()
    }

    #[test]
    fn test_plain_answer() {
        assert_eq!(
            outcome(r#"{"status":"success","query":"hi","answer":"Hello"}"#),
            QueryOutcome::Answer("Hello".into())
        );
    }

    #[test]
    fn test_answer_with_file() {
        assert_eq!(
            outcome(
                r#"{"answer":"Done","file_url":"/static/outputs/deck.pdf","download_url":"/static/outputs/deck.pptx"}"#
            ),
            QueryOutcome::AnswerWithFile {
                answer: "Done".into(),
                file_url: "/static/outputs/deck.pdf".into(),
                download_url: Some("/static/outputs/deck.pptx".into()),
            }
        );
    }

    #[test]
    fn test_error_wins_over_answer() {
        assert_eq!(
            outcome(r#"{"error":"index empty","answer":"ignored"}"#),
            QueryOutcome::Failed("index empty".into())
        );
        assert_eq!(
            outcome(r#"{"status":"error","message":"Missing 'query' in JSON body."}"#),
            QueryOutcome::Failed("Missing 'query' in JSON body.".into())
        );
    }

    #[test]
    fn test_empty_file_url_is_plain_answer() {
        assert_eq!(
            outcome(r#"{"answer":"ok","file_url":""}"#),
            QueryOutcome::Answer("ok".into())
        );
    }
}
