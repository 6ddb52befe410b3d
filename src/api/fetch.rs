//! Browser `fetch` transport

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{ApiError, ApiRequest, ApiResult, Transport};

/// Issues requests through `window.fetch` with the runtime's default timeout
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn network_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<String> {
        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &opts).map_err(network_error)?;
        if request.body.is_some() {
            js_request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(network_error)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let promise: js_sys::Promise = window.fetch_with_request(&js_request);
        let response: Response = JsFuture::from(promise)
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        log::debug!("{} {} -> {}", request.method.as_str(), request.url, response.status());
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        text.as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
    }
}
