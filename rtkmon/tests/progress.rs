// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use rtkmon::{
    Context, Flow, GTime,
    output::{Emitter, Event},
    showmsg,
};

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Span,
    Progress(f64),
    Message(String),
    Pump,
}

#[derive(Default)]
struct Recorder(Mutex<Vec<Seen>>);

impl Emitter for Recorder {
    fn emit(&self, event: &Event<'_>) {
        let seen = match event {
            Event::SpanSet(_) => Seen::Span,
            Event::Progress { percent, .. } => Seen::Progress(*percent),
            Event::Message(line) => Seen::Message((*line).to_owned()),
            Event::Pump => Seen::Pump,
        };
        self.0.lock().unwrap().push(seen);
    }
}

impl Recorder {
    fn take(&self) -> Vec<Seen> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    fn count(&self, f: impl Fn(&Seen) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|seen| f(seen)).count()
    }
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

fn setup() -> (Context, Arc<Recorder>, Capture) {
    let recorder = Arc::new(Recorder::default());
    let sink = Capture::default();
    let ctx = Context::new(Arc::clone(&recorder)).with_sink(sink.clone());
    (ctx, recorder, sink)
}

fn t0() -> GTime {
    "2024/06/01 00:00:00".parse().unwrap()
}

#[test]
fn empty_report_only_pumps() {
    let (ctx, recorder, sink) = setup();

    let flow = showmsg!(ctx);

    assert_eq!(flow, Flow::Continue);
    assert_eq!(flow.code(), 0);
    assert!(sink.lines().is_empty());
    assert_eq!(recorder.take(), vec![Seen::Pump]);
}

#[test]
fn explicit_empty_format_only_pumps() {
    let (ctx, recorder, sink) = setup();

    assert_eq!(showmsg!(ctx, ""), Flow::Continue);

    assert!(sink.lines().is_empty());
    assert_eq!(recorder.take(), vec![Seen::Pump]);
}

#[test]
fn empty_argument_still_writes_a_line() {
    let (ctx, recorder, sink) = setup();

    assert_eq!(showmsg!(ctx, "{}", ""), Flow::Continue);
    assert_eq!(showmsg!(ctx, "{}", String::new()), Flow::Continue);

    assert_eq!(sink.0.lock().unwrap().as_slice(), b"\n\n");
    assert_eq!(recorder.count(|seen| *seen == Seen::Pump), 0);
    assert_eq!(
        recorder.take(),
        vec![Seen::Message(String::new()), Seen::Message(String::new())]
    );
}

#[test]
fn report_writes_one_line() {
    let (ctx, recorder, sink) = setup();

    let flow = showmsg!(ctx, "x={}", 5);

    assert_eq!(flow.code(), 0);
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("x=5"));
    assert_eq!(recorder.take(), vec![Seen::Message("x=5".to_owned())]);
}

#[test]
fn report_has_no_fixed_buffer() {
    let (ctx, _, sink) = setup();
    let long = "sat".repeat(1000);

    showmsg!(ctx, "{long}");

    assert_eq!(sink.lines(), vec![long]);
}

#[test]
fn update_before_span_is_silent() {
    let (ctx, recorder, _) = setup();

    ctx.update(t0());
    ctx.update(GTime::UNSET);

    assert_eq!(recorder.count(|seen| matches!(seen, Seen::Progress(_))), 0);
}

#[test]
fn update_halfway() {
    let (ctx, recorder, _) = setup();

    ctx.set_span(t0(), t0().add(10.0));
    ctx.update(t0().add(5.0));

    let seen = recorder.take();
    assert_eq!(seen.len(), 2);
    let Seen::Progress(percent) = seen[1] else {
        panic!("expected progress, got {seen:?}");
    };
    assert!((percent - 50.0).abs() < 1e-9);
}

#[test]
fn update_outside_span_is_not_clamped() {
    let (ctx, recorder, _) = setup();

    ctx.set_span(t0(), t0().add(10.0));
    ctx.update(t0().add(20.0));
    ctx.update(t0().add(-10.0));

    let percents = recorder
        .take()
        .into_iter()
        .filter_map(|seen| match seen {
            Seen::Progress(percent) => Some(percent),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(percents.len(), 2);
    assert!((percents[0] - 200.0).abs() < 1e-9);
    assert!((percents[1] + 100.0).abs() < 1e-9);
}

#[test]
fn degenerate_span_is_silent() {
    let (ctx, recorder, _) = setup();

    ctx.set_span(t0(), t0());
    ctx.update(t0().add(5.0));
    ctx.set_span(t0().add(10.0), t0());
    ctx.update(t0().add(5.0));

    assert_eq!(recorder.count(|seen| matches!(seen, Seen::Progress(_))), 0);
}

#[test]
fn pump_every_twenty_third_update() {
    let (ctx, recorder, _) = setup();

    for i in 0..22 {
        ctx.update(t0().add(f64::from(i)));
    }
    assert_eq!(recorder.count(|seen| *seen == Seen::Pump), 0);

    ctx.update(t0().add(22.0));
    assert_eq!(recorder.take(), vec![Seen::Pump]);

    for i in 0..23 {
        ctx.update(t0().add(f64::from(i)));
    }
    assert_eq!(recorder.take(), vec![Seen::Pump]);
}

#[test]
fn span_is_replaced_wholesale() {
    let (ctx, recorder, _) = setup();

    ctx.set_span(t0(), t0().add(10.0));
    ctx.set_span(t0(), t0().add(100.0));
    ctx.update(t0().add(5.0));

    let Some(Seen::Progress(percent)) = recorder.take().pop() else {
        panic!("expected progress");
    };
    assert!((percent - 5.0).abs() < 1e-9);
}
