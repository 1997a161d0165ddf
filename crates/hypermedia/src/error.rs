use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("document missing"))]
  DocumentMissing,
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    url: Url,
    source: serde_json::Error,
  },
  #[snafu(display("adding `{event_type}` listener failed: {message}"))]
  EventListener {
    event_type: String,
    message: String,
  },
  #[snafu(display("invalid API path `{path}`"))]
  Path {
    path: String,
    source: url::ParseError,
  },
  #[snafu(display("request to {url} failed"))]
  Request {
    url: Url,
    source: reqwest::Error,
  },
  #[snafu(display("failed to initialize console logger"))]
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status {
    url: Url,
    status: StatusCode,
  },
  #[snafu(display("window missing"))]
  WindowMissing,
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
