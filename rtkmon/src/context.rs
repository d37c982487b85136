// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    fmt,
    io::{self, Write},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicU32, Ordering},
    },
};

use arc_swap::ArcSwap;
use gtime::GTime;
use tracing::warn;

use crate::{
    Flow, Settings, Span, message,
    output::{DefaultOutput, Emitter, Event},
};

/// State shared by the reporting, span and progress calls of one
/// long running operation
///
/// `Context` is `Send + Sync`. A span replaced by [`Context::set_span`] is
/// observed by [`Context::update`] either completely or not at all.
pub struct Context {
    span: ArcSwap<Span>,
    updates: AtomicU32,
    settings: Settings,
    output: Box<dyn Emitter>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(DefaultOutput::default())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("span", &self.span())
            .field("updates", &self.updates.load(Ordering::Relaxed))
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Context {
    pub fn new(output: impl Emitter + 'static) -> Self {
        Self::with_settings(output, Settings::default())
    }

    pub fn with_settings(output: impl Emitter + 'static, settings: Settings) -> Self {
        Self {
            span: ArcSwap::from_pointee(Span::UNSET),
            updates: AtomicU32::new(0),
            settings,
            output: Box::new(output),
            sink: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Replace the diagnostic line destination, stderr by default
    pub fn with_sink(self, sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
            ..self
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The span most recently set
    pub fn span(&self) -> Span {
        **self.span.load()
    }

    /// Write one diagnostic line
    ///
    /// Always returns [`Flow::Continue`].
    pub fn report(&self, args: fmt::Arguments<'_>) -> Flow {
        let line = message::render(args, self.settings.max_message_len);

        self.output.suspend(&mut || {
            let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(error) = writeln!(sink, "{line}").and_then(|()| sink.flush()) {
                warn!(%error, "Failed to write diagnostic line");
            }
        });
        self.output.emit(&Event::Message(&line));

        Flow::Continue
    }

    /// A report with an empty format string: write nothing, pump the UI
    ///
    /// Always returns [`Flow::Continue`].
    pub fn report_empty(&self) -> Flow {
        self.pump();
        Flow::Continue
    }

    /// Process pending UI events
    pub fn pump(&self) {
        self.output.emit(&Event::Pump);
    }

    /// Set the window that subsequent [`Context::update`] calls measure against
    ///
    /// Inverted or degenerate spans are accepted and simply disable progress.
    pub fn set_span(&self, start: GTime, end: GTime) {
        let span = Span::new(start, end);
        self.span.store(span.into());
        self.output.emit(&Event::SpanSet(span));
    }

    /// Report progress at `now` and pump the UI every
    /// [`Settings::yield_period`] calls
    pub fn update(&self, now: GTime) {
        if let Some(percent) = self.span.load().percent(now) {
            self.output.emit(&Event::Progress { now, percent });
        }

        let count = self.updates.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        if count % self.settings.yield_period == 0 {
            self.pump();
        }
    }
}
