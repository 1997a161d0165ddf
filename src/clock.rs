use super::*;

/// Local time as shown in the page header, e.g. `Jan 5, 2024, 03:04 PM`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Timestamp(pub(crate) NaiveDateTime);

impl Display for Timestamp {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0.format("%b %-d, %Y, %I:%M %p"))
  }
}

pub(crate) struct Clock;

impl Clock {
  const INTERVAL_MILLIS: u32 = 1_000;

  // The page may repeat the id, so this matches every copy.
  const SELECTOR: &'static str = "#current-time";

  pub(crate) fn start(document: Document) {
    Self::tick(&document);
    Interval::new(Self::INTERVAL_MILLIS, move || Self::tick(&document)).forget();
  }

  fn tick(document: &Document) {
    let now = Timestamp(Local::now().naive_local()).to_string();

    for element in document.select_all::<Element>(Self::SELECTOR) {
      element.set_text_content(Some(&now));
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, chrono::NaiveDate};

  fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> String {
    Timestamp(
      NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 59)
        .unwrap(),
    )
    .to_string()
  }

  #[test]
  fn afternoon() {
    assert_eq!(timestamp(2024, 1, 5, 15, 4), "Jan 5, 2024, 03:04 PM");
  }

  #[test]
  fn morning() {
    assert_eq!(timestamp(2023, 11, 28, 9, 30), "Nov 28, 2023, 09:30 AM");
  }

  #[test]
  fn midnight_and_noon() {
    assert_eq!(timestamp(2024, 2, 29, 0, 0), "Feb 29, 2024, 12:00 AM");
    assert_eq!(timestamp(2024, 7, 4, 12, 15), "Jul 4, 2024, 12:15 PM");
  }
}
