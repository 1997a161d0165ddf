use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "inventory.html")]
pub(crate) struct InventoryHtml {
  pub(crate) items: Vec<InventoryItem>,
}

impl InventoryHtml {
  const TARGET: &'static str = "inventory-table-body";
}

impl Panel for InventoryHtml {
  const NAME: &'static str = "supply inventory";

  async fn fetch(api: &Api) -> Result<Self, hypermedia::Error> {
    Ok(Self {
      items: api.supply_inventory().await?,
    })
  }

  fn render(&self, document: &Document) {
    self.replace(document, Self::TARGET);
  }
}

#[derive(Boilerplate)]
#[boilerplate(filename = "trend.html")]
pub(crate) struct TrendHtml {
  pub(crate) days: Vec<UsageDay>,
}

impl TrendHtml {
  const TARGET: &'static str = "usage-trend-body";
}

impl Panel for TrendHtml {
  const NAME: &'static str = "supply usage trend";

  async fn fetch(api: &Api) -> Result<Self, hypermedia::Error> {
    Ok(Self {
      days: api.supply_trend().await?,
    })
  }

  fn render(&self, document: &Document) {
    self.replace(document, Self::TARGET);
  }

  // Most pages have no trend table, so skip the request entirely.
  fn wanted(document: &Document) -> bool {
    document.select_id::<Element>(Self::TARGET).is_some()
  }
}
