use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyStats {
  pub total_items: f64,
  pub critical_items: f64,
  pub auto_orders_pending: f64,
  pub monthly_spend: f64,
  #[serde(default)]
  pub wastage_reduction: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
  pub name: String,
  pub supplier: String,
  pub current_stock: f64,
  pub min_required: f64,
  pub days_remaining: f64,
  pub status: String,
}

impl InventoryItem {
  /// CSS class for the status badge. Unknown statuses pass through and simply
  /// match no style.
  pub fn status_class(&self) -> String {
    self.status.to_lowercase()
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortagePrediction {
  pub item: String,
  pub shortage_date: String,
  pub recommended_order: Quantity,
  pub estimated_cost: f64,
  #[serde(default)]
  pub severity: Option<String>,
}

impl ShortagePrediction {
  pub fn severity_class(&self) -> Option<String> {
    self.severity.as_deref().map(str::to_lowercase)
  }
}

/// Recommended order size, either free text like `2000 units` or a bare count.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
  Count(f64),
  Text(String),
}

impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Count(count) => write!(f, "{count}"),
      Self::Text(text) => write!(f, "{text}"),
    }
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDay {
  pub date: String,
  pub ppe: f64,
  pub iv_fluids: f64,
  pub oxygen: f64,
}
