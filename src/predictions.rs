use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "predictions.html")]
pub(crate) struct PredictionsHtml {
  pub(crate) predictions: Vec<ShortagePrediction>,
}

impl PredictionsHtml {
  const TARGET: &'static str = "shortage-predictions";

  fn class(prediction: &ShortagePrediction) -> String {
    match prediction.severity_class() {
      Some(severity) => format!("alert alert-warning {severity}"),
      None => "alert alert-warning".into(),
    }
  }
}

impl Panel for PredictionsHtml {
  const NAME: &'static str = "supply predictions";

  async fn fetch(api: &Api) -> Result<Self, hypermedia::Error> {
    Ok(Self {
      predictions: api.supply_predictions().await?,
    })
  }

  fn render(&self, document: &Document) {
    self.replace(document, Self::TARGET);
  }
}

#[cfg(test)]
mod tests {
  use {super::*, hypermedia::hospital::Quantity};

  fn prediction(item: &str, cost: f64, severity: Option<&str>) -> ShortagePrediction {
    ShortagePrediction {
      item: item.into(),
      shortage_date: "2024-01-09".into(),
      recommended_order: Quantity::Text("2000 units".into()),
      estimated_cost: cost,
      severity: severity.map(Into::into),
    }
  }

  #[test]
  fn one_block_per_prediction_with_cost() {
    let html = PredictionsHtml {
      predictions: vec![
        prediction("PPE Kits (N95 Masks)", 3500.0, Some("High")),
        prediction("Oxygen Cylinders", 15000.0, Some("Critical")),
        prediction("IV Fluids (Saline)", 2000.0, None),
      ],
    }
    .to_string();

    assert_eq!(html.matches(r#"<div class="alert"#).count(), 3);
    assert!(html.contains("$3,500"));
    assert!(html.contains("$15,000"));
    assert!(html.contains("$2,000"));
  }

  #[test]
  fn block_contents() {
    let html = PredictionsHtml {
      predictions: vec![prediction("Oxygen Cylinders", 15000.0, Some("Critical"))],
    }
    .to_string();

    assert!(html.contains(r#"<div class="alert alert-warning critical">"#));
    assert!(html.contains("<strong>Oxygen Cylinders</strong>"));
    assert!(html.contains("2024-01-09"));
    assert!(html.contains("2000 units"));
  }

  #[test]
  fn missing_severity() {
    let html = PredictionsHtml {
      predictions: vec![prediction("Gauze", 12.5, None)],
    }
    .to_string();

    assert!(html.contains(r#"<div class="alert alert-warning">"#));
    assert!(html.contains("$12.5"));
  }

  #[test]
  fn no_predictions() {
    assert!(!PredictionsHtml {
      predictions: Vec::new()
    }
    .to_string()
    .contains("alert"));
  }
}
