//! Thin typed layer over `gloo-net` for the JSON endpoints.
//!
//! The server answers errors with JSON bodies and non-2xx statuses, so bodies
//! are decoded regardless of status; only an undecodable non-2xx body becomes
//! [`ApiError::Http`].

use crate::shared::api_utils::api_url;
use crate::shared::error::ApiError;
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{FormData, RequestRedirect};

/// Decode a JSON body into `T`.
pub fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(data) => Ok(data),
        Err(_) if !ok => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await?;
    decode_body(status, ok, &body)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await?;
    read_json(resp).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let resp = Request::post(&api_url(path)).json(body)?.send().await?;
    read_json(resp).await
}

/// POST with no body.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::post(&api_url(path)).send().await?;
    read_json(resp).await
}

/// POST a multipart form. The browser sets the boundary header itself.
pub async fn post_form<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let resp = Request::post(&api_url(path)).body(form)?.send().await?;
    read_json(resp).await
}

/// Header-only probe returning the declared `Content-Type` (empty if absent).
pub async fn head_content_type(url: &str) -> Result<String, ApiError> {
    let resp = RequestBuilder::new(url).method(Method::HEAD).send().await?;
    Ok(resp.headers().get("content-type").unwrap_or_default())
}

/// GET following redirects; returns the final resolved URL.
pub async fn resolve_redirects(url: &str) -> Result<String, ApiError> {
    let resp = Request::get(url)
        .redirect(RequestRedirect::Follow)
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Http(resp.status()));
    }
    let final_url = resp.url();
    Ok(if final_url.is_empty() { url.to_string() } else { final_url })
}
