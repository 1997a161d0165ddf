use super::*;

pub trait Select {
  /// Element with `id`, if present and of type `T`.
  fn select_id<T: JsCast>(&self, id: &str) -> Option<T>;

  fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T>;
}

impl Select for Document {
  fn select_id<T: JsCast>(&self, id: &str) -> Option<T> {
    self
      .get_element_by_id(id)
      .and_then(|element| element.dyn_into::<T>().ok())
  }

  fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
    let list = self.query_selector_all(selector).expect("invalid selector");
    let mut nodes = Vec::new();
    for i in 0..list.length() {
      if let Some(node) = list.item(i).and_then(|node| node.dyn_into::<T>().ok()) {
        nodes.push(node);
      }
    }
    nodes
  }
}
