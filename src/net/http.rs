//! Transport helpers over `gloo-net`.
//!
//! Every request goes to the `/api/v1` base path and carries an
//! `Authorization: Bearer <token>` header whenever a token is present in
//! durable storage. No retries, no caching: one call, one response, and the
//! error body (if any) parsed into [`ApiError`]. Outside the browser build
//! every helper degrades to [`ApiError::Unsupported`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::ErrorBody;

/// Base path of the backend REST API, same origin as the served app.
pub const API_BASE: &str = "/api/v1";

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the bearer token from durable storage, when one exists.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let detail = match resp.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.detail),
        Err(_) => None,
    };
    Err(ApiError::Api { status, detail })
}

#[cfg(feature = "hydrate")]
async fn run_json<T: DeserializeOwned>(req: gloo_net::http::Request) -> Result<T, ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorized(gloo_net::http::Request::get(&url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        run_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}

/// GET returning the raw response body (CSV export).
pub async fn get_text(path: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorized(gloo_net::http::Request::post(&url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        run_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unsupported)
    }
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorized(gloo_net::http::Request::put(&url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        run_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unsupported)
    }
}

pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorized(gloo_net::http::Request::delete(&url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        run_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}

/// DELETE for endpoints that answer with an empty body.
pub async fn delete_empty(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}

/// POST with `application/x-www-form-urlencoded` body (the login endpoint).
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{key}={}",
                    String::from(js_sys::encode_uri_component(value))
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        let req = authorized(gloo_net::http::Request::post(&url(path)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        run_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, fields);
        Err(ApiError::Unsupported)
    }
}

/// POST a `multipart/form-data` body (file upload). The browser sets the
/// content type, boundary included, from the `FormData` itself.
#[cfg(feature = "hydrate")]
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let req = authorized(gloo_net::http::Request::post(&url(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    run_json(req).await
}
