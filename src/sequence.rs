use super::*;

/// Orders overlapping command requests so that only the response to the most
/// recently dispatched one is applied.
#[derive(Clone, Debug, Default)]
pub(crate) struct Sequence(Rc<Cell<u64>>);

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Ticket(u64);

impl Sequence {
  pub(crate) fn dispatch(&self) -> Ticket {
    let next = self.0.get() + 1;
    self.0.set(next);
    Ticket(next)
  }

  pub(crate) fn is_latest(&self, ticket: Ticket) -> bool {
    self.0.get() == ticket.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn single_request_is_latest() {
    let sequence = Sequence::default();
    let ticket = sequence.dispatch();
    assert!(sequence.is_latest(ticket));
  }

  #[test]
  fn newer_request_supersedes_older() {
    let sequence = Sequence::default();
    let first = sequence.dispatch();
    let second = sequence.dispatch();
    assert!(!sequence.is_latest(first));
    assert!(sequence.is_latest(second));
  }

  #[test]
  fn clones_share_counter() {
    let sequence = Sequence::default();
    let handler = sequence.clone();
    let ticket = sequence.dispatch();
    handler.dispatch();
    assert!(!sequence.is_latest(ticket));
  }
}
