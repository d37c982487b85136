// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::sync::Arc;

use gtime::GTime;

use crate::Span;

pub use self::tracing::TracingOutput;
pub use self::tui::TuiOutput;

mod tracing;
mod tui;

/// Emitter used by [`crate::Context::default`]
pub type DefaultOutput = Chain<TracingOutput, TuiOutput>;

/// The UI collaborator of a [`crate::Context`]
///
/// Every method has a no-op default so an implementation only picks up
/// the events it cares about.
pub trait Emitter: Send + Sync {
    fn emit(&self, _event: &Event<'_>) {}

    /// Run `f`, which writes to the terminal, with any live display hidden
    fn suspend(&self, f: &mut dyn FnMut()) {
        f();
    }
}

/// Something the UI may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// A new span replaced the previous one, valid or not
    SpanSet(Span),
    /// Progress through a valid span
    Progress { now: GTime, percent: f64 },
    /// A diagnostic line was written
    Message(&'a str),
    /// Process pending UI events and return
    Pump,
}

pub trait EmitExt: Emitter + Sized {
    fn chain<U>(self, other: U) -> Chain<Self, U>
    where
        U: Emitter + Sized,
    {
        Chain { a: self, b: other }
    }
}

impl<T: Emitter> EmitExt for T {}

impl<T: Emitter + ?Sized> Emitter for Arc<T> {
    fn emit(&self, event: &Event<'_>) {
        (**self).emit(event);
    }

    fn suspend(&self, f: &mut dyn FnMut()) {
        (**self).suspend(f);
    }
}

impl<T: Emitter + ?Sized> Emitter for Box<T> {
    fn emit(&self, event: &Event<'_>) {
        (**self).emit(event);
    }

    fn suspend(&self, f: &mut dyn FnMut()) {
        (**self).suspend(f);
    }
}

/// Do nothing with / suppress all output
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOutput;

impl Emitter for NoopOutput {}

/// Chains multiple emitters together
#[derive(Debug, Clone, Default)]
pub struct Chain<A, B> {
    a: A,
    b: B,
}

impl<A, B> Emitter for Chain<A, B>
where
    A: Emitter,
    B: Emitter,
{
    fn emit(&self, event: &Event<'_>) {
        self.a.emit(event);
        self.b.emit(event);
    }

    fn suspend(&self, f: &mut dyn FnMut()) {
        self.a.suspend(&mut || self.b.suspend(&mut *f));
    }
}
