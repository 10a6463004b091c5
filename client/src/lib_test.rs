//! The browser logs through `console_log`, a `log` backend. Core events are
//! emitted with `tracing`, so they must surface as `log` records.

use std::future::Future;
use std::pin::pin;
use std::sync::Mutex;
use std::task::{Context, Poll, Waker};

use portfolio::config::{EmailJsConfig, PublicEmailConfig};
use portfolio::contact::{ContactController, ContactField, ContactObserver, Notice, SubmitOutcome};
use portfolio::provider::{DeliveryError, DeliveryRequest, MessageProvider, ProviderReply};
use portfolio::transition::{TransitionConfig, TransitionOrchestrator};

struct Capture {
    records: Mutex<Vec<(log::Level, String, String)>>,
}

impl log::Log for Capture {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if record.target().starts_with("portfolio") {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.target().to_owned(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };

fn install() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(log::LevelFilter::Trace);
}

fn captured(needle: &str) -> Vec<(log::Level, String, String)> {
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, _, message)| message.contains(needle))
        .cloned()
        .collect()
}

struct Offline;

#[async_trait::async_trait(?Send)]
impl MessageProvider for Offline {
    async fn send(&self, _request: &DeliveryRequest) -> Result<ProviderReply, DeliveryError> {
        Err(DeliveryError::Transport("network unreachable".into()))
    }
}

struct Silent;

impl ContactObserver for Silent {
    fn notify(&self, _notice: Notice) {}
}

#[test]
fn contact_failure_reason_reaches_log_backend() {
    install();
    let config = EmailJsConfig::from_public(PublicEmailConfig {
        service_id: "service_abc".into(),
        template_id: "template_xyz".into(),
        public_key: "pk_123".into(),
    });
    let controller = ContactController::new(config, Offline, Silent);
    controller.update_field(ContactField::Name, "Ada");
    controller.update_field(ContactField::Email, "ada@example.com");
    controller.update_field(ContactField::Subject, "Hello");
    controller.update_field(ContactField::Message, "Hi there");

    // The provider never suspends, so one poll settles the submission.
    let mut submit = pin!(controller.submit());
    let outcome = match submit.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
        Poll::Ready(outcome) => outcome,
        Poll::Pending => panic!("submit should settle without suspending"),
    };
    assert_eq!(outcome, SubmitOutcome::Failed);

    let failures = captured("contact submission failed");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, log::Level::Warn);
    assert!(failures[0].1.starts_with("portfolio::contact"));
    assert!(failures[0].2.contains("network unreachable"));
}

#[test]
fn transition_events_reach_log_backend() {
    install();
    let mut orchestrator = TransitionOrchestrator::new(TransitionConfig::default());
    orchestrator.observe_route("/home");
    orchestrator.observe_route("/projects");
    orchestrator.observe_route("/work");

    let abandoned = captured("abandoning exit");
    assert!(!abandoned.is_empty());
    assert!(abandoned.iter().all(|(level, _, _)| *level == log::Level::Debug));
}
