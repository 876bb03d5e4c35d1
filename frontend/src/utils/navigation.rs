/// Full-page navigation. Sessions live in `sessionStorage`, so they survive it.
pub fn go_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match crate::utils::storage::window() {
            Ok(window) => {
                if window.location().set_href(path).is_err() {
                    log::warn!("navigation to {} was rejected", path);
                }
            }
            Err(err) => log::warn!("cannot navigate to {}: {}", path, err),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("navigation to {} skipped outside the browser", path);
}
