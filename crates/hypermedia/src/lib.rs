use {
  hospital::{Allocation, InventoryItem, ShortagePrediction, SupplyStats, UsageDay},
  reqwest::{header, Response, StatusCode, Url},
  serde::de::DeserializeOwned,
  snafu::{ensure, OptionExt, ResultExt, Snafu},
  std::ops::Deref,
  wasm_bindgen::{
    closure::Closure,
    convert::{FromWasmAbi, IntoWasmAbi},
    JsCast, JsError, JsValue,
  },
  web_sys::{Document, Event, EventTarget, Window},
};

pub use {
  self::{api::Api, error::Error, event_target_ext::EventTargetExt, ready::when_ready, select::Select},
  hospital, js_sys, log, wasm_bindgen, wasm_bindgen_futures, web_sys,
};

#[cfg(test)]
#[macro_use]
mod test;

mod api;
mod error;
mod event_target_ext;
mod ready;
mod select;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

pub fn window() -> Result<Window, Error> {
  web_sys::window().context(error::WindowMissing)
}

pub fn document() -> Result<Document, Error> {
  window()?.document().context(error::DocumentMissing)
}
