use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(display("invalid API base URL `{value}`"))]
  ApiBase {
    value: String,
    source: url::ParseError,
  },
  #[snafu(display("API base URL `{value}` is not on page origin {origin}"))]
  ApiOrigin { value: String, origin: String },
  #[snafu(display("browser environment unavailable"))]
  Browser { source: hypermedia::Error },
  #[snafu(display("failed to read page location: {message}"))]
  Location { message: String },
  #[snafu(display("invalid page URL `{href}`"))]
  LocationParse {
    href: String,
    source: url::ParseError,
  },
  #[snafu(display("invalid log level `{value}`"))]
  LogLevel {
    value: String,
    source: log::ParseLevelError,
  },
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    let mut message = err.to_string();

    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
      message.push_str("\nbecause: ");
      message.push_str(&cause.to_string());
      source = cause.source();
    }

    JsError::new(&message).into()
  }
}
