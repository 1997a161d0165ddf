use super::*;

/// Summary counters at the top of the supply page. Each value goes into its
/// own element as plain text.
#[derive(Debug)]
pub(crate) struct Stats(pub(crate) SupplyStats);

impl Stats {
  fn fields(&self) -> Vec<(&'static str, String)> {
    let mut fields = vec![
      ("total-items", self.0.total_items.to_string()),
      ("critical-items", self.0.critical_items.to_string()),
      ("auto-orders", self.0.auto_orders_pending.to_string()),
      ("monthly-spend", Currency(self.0.monthly_spend).to_string()),
    ];

    if let Some(reduction) = self.0.wastage_reduction {
      fields.push(("wastage-reduction", format!("{reduction}%")));
    }

    fields
  }
}

impl Panel for Stats {
  const NAME: &'static str = "supply statistics";

  async fn fetch(api: &Api) -> Result<Self, hypermedia::Error> {
    Ok(Self(api.supply_stats().await?))
  }

  fn render(&self, document: &Document) {
    for (id, text) in self.fields() {
      if let Some(element) = document.select_id::<Element>(id) {
        element.set_text_content(Some(&text));
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn stats(wastage_reduction: Option<f64>) -> Stats {
    Stats(SupplyStats {
      total_items: 6.0,
      critical_items: 2.0,
      auto_orders_pending: 4.0,
      monthly_spend: 52400.0,
      wastage_reduction,
    })
  }

  #[test]
  fn counts_verbatim_and_spend_as_currency() {
    assert_eq!(
      stats(None).fields(),
      vec![
        ("total-items", "6".to_string()),
        ("critical-items", "2".to_string()),
        ("auto-orders", "4".to_string()),
        ("monthly-spend", "$52,400".to_string()),
      ]
    );
  }

  #[test]
  fn wastage_reduction_as_percent() {
    assert_eq!(
      stats(Some(15.0)).fields().last(),
      Some(&("wastage-reduction", "15%".to_string())),
    );
  }
}
