use super::*;

/// Settings taken from the page's query string, e.g.
/// `/supply-chain?log=debug&api=http://localhost:5000/`. The `api` base must
/// share the page's origin, so a crafted link cannot send requests, including
/// the bed allocation command, to another host.
#[derive(Debug, PartialEq)]
pub(crate) struct Config {
  pub(crate) api: Url,
  pub(crate) log_level: log::Level,
}

impl Config {
  pub(crate) fn from_location() -> Result<Self, Error> {
    let href = hypermedia::window()
      .context(error::Browser)?
      .location()
      .href()
      .map_err(|err| {
        error::Location {
          message: format!("{err:?}"),
        }
        .build()
      })?;

    let page = Url::parse(&href).context(error::LocationParse { href: &href })?;

    Self::from_url(&page)
  }

  pub(crate) fn from_url(page: &Url) -> Result<Self, Error> {
    let mut api = page.clone();
    api.set_fragment(None);
    api.set_query(None);

    let mut log_level = log::Level::Info;

    for (key, value) in page.query_pairs() {
      match key.as_ref() {
        "api" => {
          let base = Url::parse(&value).context(error::ApiBase { value: &*value })?;
          ensure!(
            base.origin() == page.origin(),
            error::ApiOrigin {
              value: &*value,
              origin: page.origin().ascii_serialization(),
            }
          );
          api = base;
        }
        "log" => log_level = value.parse().context(error::LogLevel { value: &*value })?,
        _ => {}
      }
    }

    Ok(Self { api, log_level })
  }
}
