pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod utils;

/// Browser entry point: installs the panic hook and logger, resolves the
/// runtime configuration in the background and mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::set_max_level(config::DEFAULT_LOG_LEVEL);
    log::info!("starting GesanG Absensi frontend");

    leptos::spawn_local(async {
        let level = config::init().await;
        log::set_max_level(level);
        log::info!("runtime config initialised (log level {})", level);
    });

    router::mount_app();
}
