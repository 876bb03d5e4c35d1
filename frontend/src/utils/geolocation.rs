use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One-shot position read. Resolves once the browser answers; no timeout is
/// applied beyond the platform default.
#[cfg(target_arch = "wasm32")]
pub async fn current_position() -> Result<Coordinates, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let geolocation = crate::utils::storage::window()
        .map_err(ApiError::geolocation)?
        .navigator()
        .geolocation()
        .map_err(|_| ApiError::geolocation("Geolocation is not supported by this browser."))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&wasm_bindgen::JsValue::NULL, &err);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position = value
                .dyn_into::<web_sys::GeolocationPosition>()
                .map_err(|_| ApiError::geolocation("Unexpected geolocation result"))?;
            let coords = position.coords();
            Ok(Coordinates {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            })
        }
        Err(err) => {
            let message = err
                .dyn_ref::<web_sys::GeolocationPositionError>()
                .map(|e| e.message())
                .unwrap_or_else(|| "Unable to retrieve your location".to_string());
            Err(ApiError::geolocation(format!("Error getting location: {}", message)))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn current_position() -> Result<Coordinates, ApiError> {
    Err(ApiError::geolocation(
        "Geolocation is not supported by this browser.",
    ))
}
