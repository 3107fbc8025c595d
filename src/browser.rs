use gloo_file::futures::read_as_data_url;
use js_sys::{Promise, Reflect};
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError};

use bizprofile_core::{geolocation::GeolocationError, Coordinates};

/// Ask the browser for the current position of the device.
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    let navigator = window().navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
    if !supported {
        return Err(GeolocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let position = JsFuture::from(promise)
        .await
        .map_err(|err| GeolocationError::Failed(js_error_message(&err)))?;
    let coords = position.unchecked_into::<Position>().coords();
    Ok(Coordinates::new(coords.latitude(), coords.longitude()))
}

/// Read the file into a `data:` URL.
pub async fn read_file_as_data_url(file: web_sys::File) -> anyhow::Result<String> {
    let file = gloo_file::File::from(file);
    Ok(read_as_data_url(&file).await?)
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<PositionError>()
        .map(PositionError::message)
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown JS error".to_string())
}
