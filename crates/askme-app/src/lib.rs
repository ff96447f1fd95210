//! AskMe App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser adapters, the controller and the egui UI.

mod app;

use askme_types::config::ClientConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "askme_canvas";
/// Optional JSON overrides for `ClientConfig`, read from the canvas element
const CONFIG_ATTRIBUTE: &str = "data-config";

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    if let Err(e) = run() {
        log::error!("AskMe failed to start: {:?}", e);
    }
}

fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("no canvas element with id 'askme_canvas'"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element is not a canvas"))?;

    let (mut config, config_error) = match canvas.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => match ClientConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (ClientConfig::default(), Some(e)),
        },
        None => (ClientConfig::default(), None),
    };

    // Initialize logging
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("AskMe WASM starting...");
    if let Some(e) = config_error {
        log::warn!("Ignoring invalid {}: {}", CONFIG_ATTRIBUTE, e);
    }

    // Image loaders only fetch absolute URLs, so relative API paths need an origin
    if config.api_base.is_empty() {
        config.api_base = window.location().origin()?;
    }
    log::info!("API base: {}", config.api_base);

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::AskMeApp::new(cc, config)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
