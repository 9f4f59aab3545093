use crate::objects::{DietResponse, Diets, FetchError, FetcherConfig, JsError};
use crate::utils::{self, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const TIMED_OUT: &str = "The request timed out.";

/// Fetches and decodes the diet plan described by `config`.
pub async fn fetch_diets(config: &FetcherConfig) -> Result<Diets, FetchError> {
    let url = config.endpoint_url()?;
    let controller = web_sys::AbortController::new().map_err(JsError::from)?;
    let resource_timeout = Timeout::abort_after(&controller, config.resource_timeout)?;

    if !utils::is_online()? {
        match config.wait_for_connectivity {
            true => {
                log::info!("offline, waiting for connectivity");
                utils::wait_for_connectivity(config.resource_timeout)
                    .await
                    .map_err(|_| FetchError::Transport(TIMED_OUT.into()))?;
            }
            false => return Err(FetchError::Transport(utils::OFFLINE.into())),
        }
    }

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_signal(Some(&controller.signal()));

    let request = web_sys::Request::new_with_str_and_init(url.as_str(), &opts).map_err(JsError::from)?;
    let window = web_sys::window().ok_or("error getting window").map_err(JsError::from)?;

    let request_timeout = Timeout::abort_after(&controller, config.request_timeout)?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| transport_error(e, &[&request_timeout, &resource_timeout]))?;
    drop(request_timeout);

    let resp: web_sys::Response = resp.dyn_into().map_err(|_| FetchError::InvalidResponseType)?;
    log::debug!("HTTP status code: {}", resp.status());
    check_status(resp.status())?;

    let request_timeout = Timeout::abort_after(&controller, config.request_timeout)?;
    let body = JsFuture::from(resp.text().map_err(JsError::from)?)
        .await
        .map_err(|e| transport_error(e, &[&request_timeout, &resource_timeout]))?
        .as_string();

    decode_body(body)
}

fn transport_error(err: wasm_bindgen::JsValue, timeouts: &[&Timeout]) -> FetchError {
    match timeouts.iter().any(|timeout| timeout.fired()) {
        true => FetchError::Transport(TIMED_OUT.into()),
        false => JsError::from(err).into(),
    }
}

fn check_status(status: u16) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        status => Err(FetchError::Server(status)),
    }
}

fn decode_body(body: Option<String>) -> Result<Diets, FetchError> {
    let body = match body {
        Some(body) if !body.is_empty() => body,
        _ => return Err(FetchError::EmptyBody),
    };
    log::debug!("raw JSON: {}", body);

    Ok(DietResponse::from_json(&body)?.into_diets())
}
