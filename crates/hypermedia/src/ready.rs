use super::*;

/// Runs `callback` once the document structure is parsed: immediately if that
/// already happened, otherwise on `DOMContentLoaded`.
pub fn when_ready(document: &Document, callback: impl FnOnce() + 'static) -> Result<(), Error> {
  if document.ready_state() != "loading" {
    callback();
    return Ok(());
  }

  let mut callback = Some(callback);

  document.add_event_listener("DOMContentLoaded", move |_: Event| {
    if let Some(callback) = callback.take() {
      callback();
    }
  })
}
