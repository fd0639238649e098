pub mod app;
pub mod dashboards;
pub mod shared;

use crate::dashboards::d410_product_tickets::store::app_ticket_store;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

#[wasm_bindgen]
pub fn hydrate() {
    // инициализация логирования через крейт `log`
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // хранилище создаётся до монтирования, вне владельца компонентов
    let _ = app_ticket_store();
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Новое состояние хранилища тикетов: JSON `StoreState` целиком.
/// Невалидный текст отклоняется, текущий снимок остаётся.
#[wasm_bindgen]
pub fn set_ticket_state(json: &str) -> Result<(), JsValue> {
    app_ticket_store().replace_from_json(json).map_err(|err| {
        log::error!("d410: ticket state rejected: {}", err);
        JsValue::from_str(&err.to_string())
    })
}

#[wasm_bindgen]
pub fn set_ticket_loading(loading: bool) {
    app_ticket_store().set_loading(loading);
}
