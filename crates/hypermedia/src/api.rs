use super::*;

/// JSON client for the dashboard backend. Paths are absolute and resolved
/// against `base`, so only its origin matters.
#[derive(Clone, Debug)]
pub struct Api {
  base: Url,
}

impl Api {
  pub fn new(base: Url) -> Self {
    Self { base }
  }

  pub async fn supply_stats(&self) -> Result<SupplyStats, Error> {
    self.get("/api/supply/stats").await
  }

  pub async fn supply_inventory(&self) -> Result<Vec<InventoryItem>, Error> {
    self.get("/api/supply/inventory").await
  }

  pub async fn supply_predictions(&self) -> Result<Vec<ShortagePrediction>, Error> {
    self.get("/api/supply/predictions").await
  }

  pub async fn supply_trend(&self) -> Result<Vec<UsageDay>, Error> {
    self.get("/api/supply/trend").await
  }

  /// Asks the backend to recompute bed allocation. Not idempotent.
  pub async fn allocate_beds(&self) -> Result<Vec<Allocation>, Error> {
    self.post("/api/beds/allocate").await
  }

  pub fn url(&self, path: &str) -> Result<Url, Error> {
    self.base.join(path).context(error::Path { path })
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
    let url = self.url(path)?;

    let response = reqwest::Client::new()
      .get(url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    Self::decode(url, response).await
  }

  async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
    let url = self.url(path)?;

    let response = reqwest::Client::new()
      .post(url.clone())
      .header(header::CONTENT_TYPE, "application/json")
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    Self::decode(url, response).await
  }

  async fn decode<T: DeserializeOwned>(url: Url, response: Response) -> Result<T, Error> {
    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    serde_json::from_slice(&body).context(error::Deserialize { url })
  }
}
