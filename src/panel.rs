use super::*;

/// A dashboard region filled from one backend endpoint when the page loads.
pub(crate) trait Panel: Sized + 'static {
  /// Label used when logging load failures.
  const NAME: &'static str;

  async fn fetch(api: &Api) -> Result<Self, hypermedia::Error>;

  fn render(&self, document: &Document);

  /// Whether the page has anywhere to put this panel.
  fn wanted(_document: &Document) -> bool {
    true
  }

  fn spawn(api: &Api, document: &Document) {
    if Self::wanted(document) {
      wasm_bindgen_futures::spawn_local(Self::load(api.clone(), document.clone()));
    }
  }

  async fn load(api: Api, document: Document) {
    apply(Self::NAME, Self::fetch(&api).await, |panel| panel.render(&document));
  }
}

/// Renders a successful fetch. Failures are logged and the page is left as it
/// was.
pub(crate) fn apply<T>(name: &str, result: Result<T, hypermedia::Error>, render: impl FnOnce(T)) {
  match result {
    Ok(value) => render(value),
    Err(err) => log::error!("error loading {name}: {err}"),
  }
}

pub(crate) trait Render: Display {
  /// Replaces the children of the element with `id`, if there is one.
  fn replace(&self, document: &Document, id: &str) {
    match document.select_id::<Element>(id) {
      Some(element) => element.set_inner_html(&self.to_string()),
      None => log::debug!("#{id} not found, skipping render"),
    }
  }
}

impl<T: Display> Render for T {}
