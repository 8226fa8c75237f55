//! Integration tests for the diagnostic events the operations emit

use std::fmt;
use std::sync::{Arc, Mutex};

use arraykit::foundation::Value;
use arraykit::stdlib::{functional, imperative, native, strict};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Layer that records the message of every event it sees.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<String>>>);

struct MessageVisitor<'a>(&'a mut Option<String>);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = None;
        event.record(&mut MessageVisitor(&mut message));
        if let Some(message) = message {
            self.0.lock().unwrap().push(message);
        }
    }
}

fn capture(f: impl FnOnce()) -> Vec<String> {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());
    tracing::subscriber::with_default(subscriber, f);
    let messages = captured.0.lock().unwrap().clone();
    messages
}

#[test]
fn lenient_parse_reports_normalized_entries() {
    let messages = capture(|| {
        assert_eq!(functional::strings_to_integers(&["3", "x"]), vec![3, 0]);
    });
    assert_eq!(messages, vec!["unparsable entry normalized to 0"]);

    let messages = capture(|| {
        assert_eq!(imperative::strings_to_integers(&["x", "y"]), vec![0, 0]);
    });
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| m == "unparsable entry normalized to 0"));
}

#[test]
fn clean_input_logs_nothing() {
    let messages = capture(|| {
        let _ = functional::strings_to_integers(&["3", "-4", "12abc"]);
        let _ = imperative::strings_to_integers(&["7"]);
    });
    assert!(messages.is_empty(), "unexpected events: {messages:?}");
}

#[test]
fn strict_parse_logs_rejection() {
    let messages = capture(|| {
        assert!(strict::strings_to_integers(&["1", "x"]).is_err());
    });
    assert_eq!(messages, vec!["rejected entry"]);
}

#[test]
fn dispatch_is_logged() {
    let messages = capture(|| {
        let arg: Value = [1i64, 2].into_iter().collect();
        assert!(native::call("makeMath", &[arg]).is_ok());
        assert!(native::call("nope", &[]).is_err());
    });
    assert_eq!(messages, vec!["dispatching native operation", "unknown operation"]);
}
