pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod pages;
pub mod state;
pub mod validation;

use cfg_if::cfg_if;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::SignupConfig;

pub use crate::error::{Error, FieldValidationError, Result};
pub use crate::model::{Field, FormData, Gender, MaskedField, Validity, Visibility};
pub use crate::notify::Notifier;
pub use crate::state::{Registration, SignupState, SubmitOutcome};

cfg_if! {
    if #[cfg(feature = "develop")] {
        fn init_log() {
            wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
            console_error_panic_hook::set_once();
        }
    } else {
        fn init_log() {}
    }
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    init_log();
    log::info!("Starting signup form");
    App::mount(App::new(SignupConfig::load()))?;
    Ok(())
}
