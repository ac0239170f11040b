//! Bridge from tracing to the console

use std::fmt::Write;

use crate::{ACTIVE, CallSite, Facility, Level, Record};
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that forwards events to [`ACTIVE`]
#[derive(Debug, Default)]
pub struct TracingBridge;

impl<S> Layer<S> for TracingBridge
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        if !ACTIVE.is_enabled() {
            return;
        }

        let metadata = event.metadata();
        let level = map_level(*metadata.level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let spans: Vec<&str> = ctx
            .event_scope(event)
            .map(|scope| scope.from_root().map(|span| span.name()).collect())
            .unwrap_or_default();

        let call_site = CallSite::new(
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
            metadata.target(),
        );

        if spans.is_empty() {
            ACTIVE.emit(&Record::new(level, format_args!("{}", visitor.message), call_site));
        } else {
            ACTIVE.emit(&Record::new(
                level,
                format_args!("{}: {}", spans.join("::"), visitor.message),
                call_site,
            ));
        }
    }
}

fn map_level(level: tracing::Level) -> Level {
    match level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warning,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        _ => Level::Trace,
    }
}

/// Visitor to extract the message from tracing fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn set_message(&mut self, text: &str) {
        if self.message.is_empty() {
            self.message.push_str(text);
        } else {
            self.message.insert_str(0, &format!("{text} "));
        }
    }

    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Display) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        let _ = write!(self.message, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.set_message(value);
        } else {
            self.push_field(field.name(), &value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.set_message(&format!("{value:?}"));
        } else {
            self.push_field(field.name(), &format_args!("{value:?}"));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push_field(field.name(), &value);
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push_field(field.name(), &value);
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.push_field(field.name(), &value);
    }
}

/// Route `tracing` events to the console.
///
/// This sets up a global subscriber whose only layer is [`TracingBridge`].
///
/// # Example
/// ```no_run
/// use dave_logs::compat::tracing_bridge::init_tracing_bridge;
///
/// init_tracing_bridge().expect("Failed to set tracing bridge");
/// tracing::warn!(attempt = 2, "retrying");
/// ```
pub fn init_tracing_bridge() -> crate::Result<()> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(TracingBridge)
        .try_init()?;

    Ok(())
}
