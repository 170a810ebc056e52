use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

mod config;
mod error;
mod interactions;
mod listener;
mod nav;
mod scroll;
mod view;
mod demo {
    pub mod report;
    pub mod runners;
}
mod effects {
    pub mod navbar;
    pub mod reveal;
    pub mod styles;
}

use config::PageConfig;
use error::BindError;
use interactions::Interactions;
use view::PageView;

fn boot() {
    let Some(window) = web_sys::window() else {
        error!("{}", BindError::NoWindow);
        return;
    };

    let config = PageConfig::default();
    let installed = PageView::bind(window, &config)
        .and_then(|view| Interactions::install(&view, &config));

    match installed {
        Ok(interactions) => {
            info!("Page interactions ready");
            interactions.keep_alive();
        }
        Err(e) => error!("Page interactions not installed: {e}"),
    }
}

/// Runs `boot` once the markup is parsed, immediately if it already is.
fn when_dom_ready(document: &Document) -> Result<(), BindError> {
    if !still_loading(&document.ready_state()) {
        boot();
        return Ok(());
    }

    let callback = Closure::once(boot);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .map_err(|_| BindError::Listener("DOMContentLoaded"))?;
    callback.forget();
    Ok(())
}

fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page interactions");
    let started = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BindError::NoDocument)
        .and_then(|document| when_dom_ready(&document));

    if let Err(e) = started {
        error!("Page interactions not started: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::still_loading;

    #[test]
    fn waits_only_while_the_document_is_loading() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }
}
