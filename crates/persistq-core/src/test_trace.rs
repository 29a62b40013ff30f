//! Module: test_trace
//! Responsibility: collect tracing events emitted inside a closure so unit
//! tests can assert on their level and fields.
//! Boundary: the subscriber is thread-scoped; events from other tests never
//! leak in.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex},
};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    Registry,
    layer::{Context, Layer, SubscriberExt},
};

///
/// CapturedEvent
///
/// One recorded event. Field values are kept in their `Debug` rendering;
/// string fields are stored unquoted.
///

#[derive(Clone, Debug)]
pub(crate) struct CapturedEvent {
    pub(crate) level: Level,
    fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub(crate) fn message(&self) -> Option<&str> {
        self.field("message")
    }

    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct FieldRecorder<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldRecorder(&mut fields));

        self.events
            .lock()
            .expect("capture lock poisoned")
            .push(CapturedEvent {
                level: *event.metadata().level(),
                fields,
            });
    }
}

/// Run `f` under a capturing subscriber; return its output and every event.
pub(crate) fn capture_events<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);

    let out = tracing::subscriber::with_default(Registry::default().with(layer), f);
    let captured = events.lock().expect("capture lock poisoned").clone();

    (out, captured)
}

/// Events carrying `message`, in emission order.
pub(crate) fn with_message<'a>(
    events: &'a [CapturedEvent],
    message: &'a str,
) -> impl Iterator<Item = &'a CapturedEvent> {
    events
        .iter()
        .filter(move |event| event.message() == Some(message))
}
