use super::*;

/// Dollar amount in en-US style: `$` prefix, comma thousands separators, and
/// at most three fractional digits with trailing zeros dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Currency(pub(crate) f64);

impl Display for Currency {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "$")?;

    if !self.0.is_finite() {
      return write!(f, "{}", self.0);
    }

    let rounded = (self.0 * 1000.0).round() / 1000.0;

    if rounded < 0.0 {
      write!(f, "-")?;
    }

    let digits = format!("{:.3}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    for (i, digit) in integer.chars().enumerate() {
      if i > 0 && (integer.len() - i) % 3 == 0 {
        write!(f, ",")?;
      }
      write!(f, "{digit}")?;
    }

    let fraction = fraction.trim_end_matches('0');

    if !fraction.is_empty() {
      write!(f, ".{fraction}")?;
    }

    Ok(())
  }
}
