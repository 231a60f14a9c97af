use wasm_bindgen::prelude::*;
mod app;
mod components;
pub mod constants;
pub mod currency;
pub mod state;
pub mod utils;
pub mod validation;

pub use currency::{format_currency, validate_deposit_amount};
pub use validation::{clean_username, validate_wallet_address};

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    wasm_logger::init(wasm_logger::Config::new(constants::LOG_LEVEL));
    log::info!("TrustUp client starting");
    yew::Renderer::<app::App>::new().render();
    Ok(())
}
