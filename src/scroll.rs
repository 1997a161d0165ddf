use super::*;

pub(crate) struct SmoothScroll;

impl SmoothScroll {
  const SELECTOR: &'static str = r##"a[href^="#"]"##;

  pub(crate) fn bind(document: &Document) -> Result<(), hypermedia::Error> {
    let anchors = document.select_all::<Element>(Self::SELECTOR);

    log::debug!("binding smooth scroll to {} anchors", anchors.len());

    for anchor in anchors {
      let document = document.clone();
      let link = anchor.clone();
      anchor.add_event_listener("click", move |event: MouseEvent| {
        event.prevent_default();

        let Some(href) = link.get_attribute("href") else {
          return;
        };

        if let Some(target) = fragment(&href).and_then(|id| document.get_element_by_id(id)) {
          let options = ScrollIntoViewOptions::new();
          options.set_behavior(ScrollBehavior::Smooth);
          target.scroll_into_view_with_scroll_into_view_options(&options);
        }
      })?;
    }

    Ok(())
  }
}

fn fragment(href: &str) -> Option<&str> {
  href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fragments() {
    assert_eq!(fragment("#inventory"), Some("inventory"));
    assert_eq!(fragment("#shortage-predictions"), Some("shortage-predictions"));
  }

  #[test]
  fn bare_hash_has_no_target() {
    assert_eq!(fragment("#"), None);
  }

  #[test]
  fn non_fragment_links() {
    assert_eq!(fragment("/dashboard#beds"), None);
    assert_eq!(fragment(""), None);
  }
}
