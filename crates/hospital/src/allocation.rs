use super::*;

/// One department's row in the bed allocation response. Field names follow the
/// backend's snake_case keys.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Allocation {
  pub department: String,
  pub total_beds: f64,
  pub occupied_beds: f64,
  pub available_beds: f64,
  pub utilization: f64,
  #[serde(default)]
  pub recommendation: Option<String>,
}

impl Allocation {
  pub const PLACEHOLDER: &'static str = "—";

  pub fn recommendation(&self) -> &str {
    match self.recommendation.as_deref() {
      Some(recommendation) if !recommendation.is_empty() => recommendation,
      _ => Self::PLACEHOLDER,
    }
  }
}
