use tracing_common::progress;

use crate::output::{Emitter, Event};

/// Tracing output
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOutput;

impl Emitter for TracingOutput {
    fn emit(&self, event: &Event<'_>) {
        match event {
            Event::SpanSet(span) => progress::span_set(span.start, span.end, span.duration(), span.is_valid()),
            Event::Progress { now, percent } => progress::progress_update(now, *percent),
            Event::Message(line) => progress::message(line),
            Event::Pump => progress::pump(),
        }
    }
}
