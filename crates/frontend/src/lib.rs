pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::config::load_config(None);
    let level = config
        .as_ref()
        .ok()
        .and_then(|c| c.logging.level().ok())
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    // Pages are mounted by the presentation layer, which is not part of this crate
    let loaded = config.and_then(|config| shared::data::init_data_layer(&config));
    if let Err(e) = loaded {
        log::error!("Failed to start admin panel: {e:#}");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
