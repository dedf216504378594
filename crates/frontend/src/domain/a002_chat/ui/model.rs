//! Chat - Model (API functions)

use crate::shared::error::ApiError;
use crate::shared::http::post_json;
use contracts::domain::a002_chat_query::aggregate::{
    QueryOutcome, QueryRequest, QueryResponse, QUERY_PATH,
};

/// Ask the retrieval backend a question.
pub async fn send_query(query: &str) -> Result<QueryOutcome, ApiError> {
    let body = QueryRequest {
        query: query.to_string(),
    };
    let resp: QueryResponse = post_json(QUERY_PATH, &body).await?;
    Ok(resp.into_outcome())
}
