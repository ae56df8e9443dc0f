//! Thin `window.fetch` transport used by the web object-store adapter.

#![cfg(target_arch = "wasm32")]

use platform_store::StoreError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Completed HTTP exchange: status code plus the full response body as text.
pub(crate) struct FetchOutcome {
    pub status: u16,
    pub body: String,
}

impl FetchOutcome {
    /// Returns the body for 2xx responses, otherwise a [`StoreError::Status`].
    pub fn into_success_body(self) -> Result<String, StoreError> {
        if (200..300).contains(&self.status) {
            Ok(self.body)
        } else {
            Err(StoreError::status(self.status, &self.body))
        }
    }
}

pub(crate) fn js_error_to_string(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Builds request headers carrying the store credentials and optional content type.
pub(crate) fn auth_headers(
    api_key: &str,
    content_type: Option<&str>,
) -> Result<Headers, StoreError> {
    let headers =
        Headers::new().map_err(|err| StoreError::Transport(js_error_to_string(&err)))?;
    if !api_key.is_empty() {
        headers
            .set("apikey", api_key)
            .and_then(|()| headers.set("authorization", &format!("Bearer {api_key}")))
            .map_err(|err| StoreError::Transport(js_error_to_string(&err)))?;
    }
    if let Some(content_type) = content_type {
        headers
            .set("content-type", content_type)
            .map_err(|err| StoreError::Transport(js_error_to_string(&err)))?;
    }
    Ok(headers)
}

/// Builds a request for `url` with the given method, headers, and optional body.
pub(crate) fn build_request(
    url: &str,
    method: &str,
    headers: Headers,
    body: Option<&JsValue>,
) -> Result<Request, StoreError> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(headers.as_ref());
    if let Some(body) = body {
        init.set_body(body);
    }
    Request::new_with_str_and_init(url, &init)
        .map_err(|err| StoreError::Transport(js_error_to_string(&err)))
}

/// Sends `request` through `window.fetch` and drains the response body as text.
pub(crate) async fn send(request: Request) -> Result<FetchOutcome, StoreError> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Transport("window unavailable".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| StoreError::Transport(js_error_to_string(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| StoreError::Transport(js_error_to_string(&err)))?;
    let status = response.status();
    let body_promise = response
        .text()
        .map_err(|err| StoreError::Transport(js_error_to_string(&err)))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|err| StoreError::Transport(js_error_to_string(&err)))?
        .as_string()
        .unwrap_or_default();
    Ok(FetchOutcome { status, body })
}
