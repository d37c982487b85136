// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Structured progress events for tracing

use std::fmt::Display;

use tracing::{debug, info, trace};

/// Target used for span, progress and message events
pub const PROGRESS_TARGET: &str = "progress";
/// Target used for UI pump events
pub const PUMP_TARGET: &str = "progress::pump";

pub fn span_set(start: impl Display, end: impl Display, duration_secs: f64, valid: bool) {
    info!(
        target: PROGRESS_TARGET,
        %start,
        %end,
        duration_secs,
        valid,
        event_type = "span_set",
        "Progress span set"
    );
}

pub fn progress_update(now: impl Display, percent: f64) {
    debug!(
        target: PROGRESS_TARGET,
        %now,
        progress = percent,
        event_type = "progress_update",
        "Progress update"
    );
}

pub fn message(line: &str) {
    info!(target: PROGRESS_TARGET, event_type = "message", "{line}");
}

pub fn pump() {
    trace!(target: PUMP_TARGET, event_type = "pump", "Processing pending UI events");
}
