//! One-shot fetch of the dataset document.
//!
//! A single attempt, no retry. Any failure is terminal for the app.

use campr_data::{Dataset, DatasetError, ParkIndex};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Why the dataset could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No browser window available")]
    NoWindow,

    #[error("Request for {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("Request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Response body for {url} is not text")]
    Body { url: String },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Best-effort message out of a rejected JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(value)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

async fn await_promise(url: &str, promise: js_sys::Promise) -> Result<JsValue, LoadError> {
    JsFuture::from(promise).await.map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        message: js_message(&e),
    })
}

/// Fetch, parse and index the dataset at `url`.
pub async fn fetch_index(url: &str) -> Result<ParkIndex, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let fetch_err = |e: JsValue| LoadError::Fetch {
        url: url.to_string(),
        message: js_message(&e),
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(fetch_err)?;

    log::info!("[campr] loader: fetching {}", url);
    let response: Response = await_promise(url, window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(fetch_err)?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = await_promise(url, response.text().map_err(fetch_err)?)
        .await?
        .as_string()
        .ok_or_else(|| LoadError::Body {
            url: url.to_string(),
        })?;

    let index = ParkIndex::build(Dataset::from_json(&body)?)?;
    log::info!("[campr] loader: {} parks ready", index.parks().len());
    Ok(index)
}
