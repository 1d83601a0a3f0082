// src/locate.rs — one-shot device location via the browser Geolocation API

use js_sys::Promise;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError, PositionOptions};

use crate::booking::Coordinates;

pub const MANUAL_ENTRY_HINT: &str = "Please allow location access or enter your address manually.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("location services are not available in this browser")]
    Unsupported,
    #[error("location permission was denied")]
    PermissionDenied,
    #[error("position could not be determined")]
    PositionUnavailable,
    #[error("timed out waiting for a position fix")]
    Timeout,
    #[error("location request failed: {0}")]
    Other(String),
}

impl LocateError {
    /// Maps `PositionError.code`.
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            PositionError::PERMISSION_DENIED => LocateError::PermissionDenied,
            PositionError::POSITION_UNAVAILABLE => LocateError::PositionUnavailable,
            PositionError::TIMEOUT => LocateError::Timeout,
            _ => LocateError::Other(message),
        }
    }
}

/// Asks the browser for a single high-accuracy fix. No retry; the caller decides.
pub async fn current_position(timeout_ms: u32) -> Result<Coordinates, LocateError> {
    let window = web_sys::window().ok_or(LocateError::Unsupported)?;
    let geo = window
        .navigator()
        .geolocation()
        .map_err(|_| LocateError::Unsupported)?;

    let opts = PositionOptions::new();
    opts.set_enable_high_accuracy(true);
    opts.set_timeout(timeout_ms);

    let mut issue_err = None;
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) =
            geo.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &opts)
        {
            issue_err = Some(e);
        }
    });
    if let Some(e) = issue_err {
        return Err(LocateError::Other(js_message(&e)));
    }

    match JsFuture::from(promise).await {
        Ok(value) => {
            let pos: Position = value.unchecked_into();
            let coords = pos.coords();
            Ok(Coordinates::new(coords.latitude(), coords.longitude()))
        }
        Err(value) => match value.dyn_into::<PositionError>() {
            Ok(err) => Err(LocateError::from_code(err.code(), err.message())),
            Err(other) => Err(LocateError::Other(js_message(&other))),
        },
    }
}

fn js_message(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_position_error_codes() {
        assert_eq!(LocateError::from_code(1, String::new()), LocateError::PermissionDenied);
        assert_eq!(LocateError::from_code(2, String::new()), LocateError::PositionUnavailable);
        assert_eq!(LocateError::from_code(3, String::new()), LocateError::Timeout);
        assert_eq!(
            LocateError::from_code(9, "weird".into()),
            LocateError::Other("weird".into())
        );
    }

    #[test]
    fn maps_the_browser_error_constants() {
        assert_eq!(
            LocateError::from_code(PositionError::PERMISSION_DENIED, String::new()),
            LocateError::PermissionDenied
        );
        assert_eq!(
            LocateError::from_code(PositionError::POSITION_UNAVAILABLE, String::new()),
            LocateError::PositionUnavailable
        );
        assert_eq!(
            LocateError::from_code(PositionError::TIMEOUT, String::new()),
            LocateError::Timeout
        );
    }

    #[test]
    fn errors_read_as_sentences() {
        assert_eq!(
            LocateError::Timeout.to_string(),
            "timed out waiting for a position fix"
        );
        assert_eq!(
            LocateError::Other("boom".into()).to_string(),
            "location request failed: boom"
        );
    }
}
