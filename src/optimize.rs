use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "allocation.html")]
pub(crate) struct AllocationHtml {
  pub(crate) allocations: Vec<Allocation>,
}

impl AllocationHtml {
  const TARGET: &'static str = "allocation-table-body";
}

/// Wires the auto-optimize button to the bed allocation command.
pub(crate) struct Optimizer {
  api: Api,
  document: Document,
  sequence: Sequence,
}

impl Optimizer {
  const BUTTON: &'static str = "auto-optimize-btn";

  pub(crate) fn bind(api: &Api, document: &Document) -> Result<(), hypermedia::Error> {
    let Some(button) = document.select_id::<Element>(Self::BUTTON) else {
      log::debug!("#{} not found, auto-optimize disabled", Self::BUTTON);
      return Ok(());
    };

    let optimizer = Rc::new(Self {
      api: api.clone(),
      document: document.clone(),
      sequence: Sequence::default(),
    });

    button.add_event_listener("click", move |_: MouseEvent| -> Promise {
      let ticket = optimizer.sequence.dispatch();
      wasm_bindgen_futures::future_to_promise(optimizer.clone().optimize(ticket))
    })
  }

  async fn optimize(self: Rc<Self>, ticket: Ticket) -> Result<JsValue, JsValue> {
    match self.api.allocate_beds().await {
      Ok(allocations) if self.sequence.is_latest(ticket) => {
        AllocationHtml { allocations }.replace(&self.document, AllocationHtml::TARGET);
      }
      Ok(_) => log::debug!("discarding stale bed allocation response {ticket:?}"),
      Err(err) => log::error!("error optimizing bed allocation: {err}"),
    }

    Ok(JsValue::UNDEFINED)
  }
}
