//! Thin wrappers over `gloo-net` that map every failure to [`ApiError`].

use contracts::shared::errors::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Status + body of a reply, for endpoints whose body is parsed leniently
#[derive(Debug, Clone)]
pub struct RawReply {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

/// Downloaded file
#[derive(Debug, Clone)]
pub struct BinaryReply {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: Option<String>,
}

pub(crate) fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub(crate) fn network_error(e: impl std::fmt::Display) -> ApiError {
    log::warn!("network failure: {}", e);
    ApiError::Network(e.to_string())
}

pub(crate) fn correlation_id(response: &Response) -> Option<String> {
    let headers = response.headers();
    headers
        .get("X-Error-Id")
        .or_else(|| headers.get("X-Correlation-Id"))
}

/// Builds the error for a non-2xx reply, reading its body for detail
pub async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let correlation = correlation_id(&response);
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::http(status, &body, correlation);
    log::error!("{} {} -> {}", status, response.url(), err);
    err
}

async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(error_from(response).await)
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = authorized(Request::get(url))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    let response = expect_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST/PUT with a JSON body; the reply body is ignored
pub async fn send_json<B: Serialize>(method: &str, url: &str, body: &B) -> Result<(), ApiError> {
    log::debug!("{} {}", method, url);
    let builder = match method {
        "PUT" => Request::put(url),
        _ => Request::post(url),
    };
    let response = authorized(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

/// DELETE whose reply is interpreted by the caller, success or not
pub async fn delete_raw<B: Serialize>(url: &str, body: Option<&B>) -> Result<RawReply, ApiError> {
    log::debug!("DELETE {}", url);
    let builder = authorized(Request::delete(url));
    let response = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(network_error)?;
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !ok {
        log::warn!("DELETE {} -> {}", url, status);
    }
    Ok(RawReply { ok, status, body })
}

/// GET a generated file (reports, templates)
pub async fn get_binary(url: &str) -> Result<BinaryReply, ApiError> {
    log::debug!("GET {}", url);
    let response = authorized(Request::get(url))
        .send()
        .await
        .map_err(network_error)?;
    let response = expect_ok(response).await?;
    let headers = response.headers();
    let content_type = headers.get("Content-Type").unwrap_or_default();
    let file_name = headers
        .get("Content-Disposition")
        .and_then(|cd| {
            contracts::usecases::u501_spreadsheet_import::content_disposition::filename_from_content_disposition(&cd)
        });
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(BinaryReply {
        bytes,
        content_type,
        file_name,
    })
}
