#![allow(async_fn_in_trait)]

use {
  self::{
    clock::Clock,
    config::Config,
    currency::Currency,
    error::Error,
    optimize::Optimizer,
    panel::{Panel, Render},
    predictions::PredictionsHtml,
    scroll::SmoothScroll,
    sequence::{Sequence, Ticket},
    stats::Stats,
    supply::{InventoryHtml, TrendHtml},
  },
  boilerplate::Boilerplate,
  chrono::{Local, NaiveDateTime},
  gloo_timers::callback::Interval,
  hypermedia::{
    hospital::{Allocation, InventoryItem, ShortagePrediction, SupplyStats, UsageDay},
    js_sys::Promise,
    Api, EventTargetExt, Select,
  },
  snafu::{ensure, ResultExt, Snafu},
  std::{
    cell::Cell,
    fmt::{self, Display, Formatter},
    rc::Rc,
  },
  url::Url,
  wasm_bindgen::{prelude::wasm_bindgen, JsError, JsValue},
  web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions},
};


mod clock;
mod config;
mod currency;
mod error;
mod optimize;
mod panel;
mod predictions;
mod scroll;
mod sequence;
mod stats;
mod supply;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
  let config = Config::from_location()?;

  hypermedia::initialize_console(config.log_level).context(error::Browser)?;

  log::debug!("dashboard API at {}", config.api);

  let document = hypermedia::document().context(error::Browser)?;

  Clock::start(document.clone());

  let api = Api::new(config.api);
  let ready = document.clone();

  hypermedia::when_ready(&document, move || initialize(&api, &ready)).context(error::Browser)?;

  Ok(())
}

fn initialize(api: &Api, document: &Document) {
  if let Err(err) = SmoothScroll::bind(document) {
    log::error!("error binding smooth scroll: {err}");
  }

  Stats::spawn(api, document);
  InventoryHtml::spawn(api, document);
  PredictionsHtml::spawn(api, document);
  TrendHtml::spawn(api, document);

  if let Err(err) = Optimizer::bind(api, document) {
    log::error!("error binding auto-optimize button: {err}");
  }

  log::debug!("dashboard ready");
}
