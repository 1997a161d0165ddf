use {
  serde::{Deserialize, Serialize},
  std::fmt::{self, Display, Formatter},
};

pub use {
  allocation::Allocation,
  supply::{InventoryItem, Quantity, ShortagePrediction, SupplyStats, UsageDay},
};

mod allocation;
mod supply;
