use dominator::traits::StaticEvent;

/// `submit` on a `<form>`. Register it with `EventOptions::preventable()` so
/// [`FormSubmit::prevent_default`] can stop the browser's navigation.
pub struct FormSubmit {
    event: web_sys::Event,
}

impl StaticEvent for FormSubmit {
    const EVENT_TYPE: &'static str = "submit";

    #[inline]
    fn unchecked_from_event(event: web_sys::Event) -> Self {
        Self { event }
    }
}

impl FormSubmit {
    #[inline]
    pub fn prevent_default(&self) {
        self.event.prevent_default();
    }
}
