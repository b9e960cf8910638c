use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use whodat::catalog::HttpGet;
use whodat::error::FetchError;

/// `window.fetch`, GET only.
pub(super) struct BrowserHttp;

impl HttpGet for BrowserHttp {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or_else(|| FetchError::transport(url, "no window"))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| FetchError::transport(url, js_error_text(&e)))?;

        let resp = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::transport(url, js_error_text(&e)))?;
        let resp: Response = resp
            .dyn_into()
            .map_err(|_| FetchError::transport(url, "fetch did not resolve to a Response"))?;

        if !resp.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: resp.status(),
            });
        }

        let text = resp
            .text()
            .map_err(|e| FetchError::decode(url, js_error_text(&e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| FetchError::decode(url, js_error_text(&e)))?;
        text.as_string()
            .ok_or_else(|| FetchError::decode(url, "body is not text"))
    }
}

fn js_error_text(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    match v.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => format!("{v:?}"),
    }
}
