//! Application bootstrap.
//!
//! Builds the root component, builds a fresh state container, registers it
//! through context, and attaches the result to the anchor element. Runs once
//! per page load; calling it twice mounts twice.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::auth::AuthStore;
use crate::state::ui::UiState;
use crate::util::storage::KeyValueStore;

/// Browser entry: load config, start logging, mount. Failures are logged.
#[cfg(feature = "csr")]
pub fn run() {
    let (config, config_error) = match AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // A logger may already be installed when the module is re-initialised.
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::warn!("invalid build configuration, using defaults: {e}");
    }

    if let Err(e) = mount(config) {
        log::error!("bootstrap failed: {e}");
    }
}

/// Mount [`App`](crate::app::App) onto `#<config.mount_anchor>` backed by
/// `localStorage`.
///
/// # Errors
///
/// Returns a [`BootstrapError`](crate::error::BootstrapError) if the anchor
/// element cannot be resolved.
#[cfg(feature = "csr")]
pub fn mount(config: AppConfig) -> Result<(), crate::error::BootstrapError> {
    use crate::app::App;
    use crate::util::storage::BrowserStorage;

    let anchor = find_anchor(&config.mount_anchor)?;
    let anchor_id = config.mount_anchor.clone();
    let handle = leptos::mount::mount_to(anchor, move || {
        install_stores(&config, Arc::new(BrowserStorage));
        view! { <App/> }
    });
    // The app lives as long as the page.
    handle.forget();
    log::info!("mounted on #{anchor_id}");
    Ok(())
}

#[cfg(feature = "csr")]
fn find_anchor(id: &str) -> Result<web_sys::HtmlElement, crate::error::BootstrapError> {
    use crate::error::BootstrapError;
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .ok_or(BootstrapError::NoWindow)?
        .document()
        .ok_or(BootstrapError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| BootstrapError::MissingAnchor { id: id.to_owned() })?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BootstrapError::AnchorNotHtml { id: id.to_owned() })
}

/// Build the state container and register it with the current owner.
///
/// Must run inside a reactive owner (the mount closure in the app). Returns
/// the auth store signal that was provided.
pub fn install_stores(config: &AppConfig, storage: Arc<dyn KeyValueStore>) -> RwSignal<AuthStore> {
    let ui = RwSignal::new(UiState::default());

    let mut store = AuthStore::load(storage, config);
    store.on_logout("ui", move || ui.set(UiState::default()));
    if config.reload_on_logout {
        store.on_logout("page-reload", reload_page);
    }

    let auth = RwSignal::new(store);
    provide_context(auth);
    provide_context(ui);
    auth
}

fn reload_page() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
