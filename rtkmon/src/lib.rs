// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Progress and diagnostic plumbing for long running GNSS post-processing
//!
//! A caller owned [`Context`] receives three kinds of calls from a
//! processing loop:
//!
//! - [`Context::set_span`] once, with the first and last epoch to process
//! - [`Context::update`] for every processed epoch
//! - [`Context::report`] (or [`showmsg!`]) for ad hoc diagnostics
//!
//! Progress and UI pump requests are forwarded to an injected
//! [`output::Emitter`].

pub use gtime::GTime;

pub use self::context::Context;
pub use self::message::Flow;
pub use self::settings::Settings;
pub use self::span::Span;

pub mod output;

mod context;
mod message;
mod settings;
mod span;

/// Program name, also used to locate the config file
pub const NAME: &str = "rtkmon";

/// Report a diagnostic line through a [`Context`]
///
/// `showmsg!(ctx)` or `showmsg!(ctx, "")` only pumps pending UI events.
/// Any other format string writes exactly one line, even if it renders empty.
#[macro_export]
macro_rules! showmsg {
    ($ctx:expr) => {
        $ctx.report_empty()
    };
    ($ctx:expr, "") => {
        $ctx.report_empty()
    };
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.report(::std::format_args!($($arg)+))
    };
}
