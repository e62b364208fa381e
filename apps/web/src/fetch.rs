use heatmap_core::{ChartOptions, Dataset, DatasetError, HeatmapChart};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("fetch did not resolve to a Response")]
    NotAResponse,
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("failed to decode dataset: {0}")]
    Decode(#[from] serde_wasm_bindgen::Error),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// One GET for the dataset. No timeout and no retry.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| FetchError::Request(describe(&error)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| FetchError::Network(describe(&error)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| FetchError::NotAResponse)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .json()
        .map_err(|error| FetchError::Body(describe(&error)))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|error| FetchError::Body(describe(&error)))?;

    let dataset = serde_wasm_bindgen::from_value::<Dataset>(json)?;
    Ok(dataset)
}

/// Fetch, validate and lay out the chart in one step.
pub async fn load_chart(url: &str, options: &ChartOptions) -> Result<HeatmapChart, FetchError> {
    let dataset = fetch_dataset(url).await?;
    if !dataset.is_year_ordered() {
        web_sys::console::warn_1(
            &"Temperature data is not sorted by year; the year axis uses the first and last entries"
                .into(),
        );
    }
    Ok(HeatmapChart::build(&dataset, options)?)
}
