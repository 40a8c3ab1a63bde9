//! Browser fetch implementation of the catalog source.

use async_trait::async_trait;
use http::StatusCode;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use turbo_catalog::store::{CatalogSource, FetchResponse};
use turbo_catalog::LoadError;

/// Fetches the static catalog file with `window.fetch`.
pub struct BrowserFetchSource {
    url: String,
}

impl BrowserFetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSource for BrowserFetchSource {
    async fn fetch(&self) -> Result<FetchResponse, LoadError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| LoadError::Transport(format!("request error: {:?}", e)))?;

        let window =
            web_sys::window().ok_or_else(|| LoadError::Transport("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| LoadError::Transport(format!("fetch error: {:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| LoadError::Transport("response is not a Response".to_string()))?;

        let status = StatusCode::from_u16(resp.status())
            .map_err(|e| LoadError::Transport(format!("bad status: {}", e)))?;

        let text = JsFuture::from(
            resp.text()
                .map_err(|e| LoadError::Transport(format!("body promise error: {:?}", e)))?,
        )
        .await
        .map_err(|e| LoadError::Transport(format!("body error: {:?}", e)))?;

        let body = text
            .as_string()
            .ok_or_else(|| LoadError::Malformed("body is not text".to_string()))?;

        Ok(FetchResponse { status, body })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
