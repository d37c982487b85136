// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{sync::Arc, thread, time::Duration};

use clap::Parser;
use rtkmon::{
    Context, GTime, Settings,
    output::{EmitExt, TracingOutput, TuiOutput},
    showmsg,
};
use thiserror::Error;
use tracing::info;
use tui::Styled;

/// Tolerance when comparing the running epoch against the window end
const DTTOL: f64 = 1e-6;

/// Largest accepted epoch interval, about a century
const MAX_STEP: f64 = 100.0 * 366.0 * 86400.0;

#[derive(Debug, Parser)]
#[command(about = "Step through a processing window, epoch by epoch, driving the progress output")]
pub struct Command {
    #[arg(long, help = "First epoch, yyyy/mm/dd hh:mm:ss[.sss]")]
    start: GTime,
    #[arg(long, help = "Last epoch, yyyy/mm/dd hh:mm:ss[.sss]")]
    end: GTime,
    #[arg(long, default_value_t = 30.0, help = "Epoch interval in seconds")]
    step: f64,
    #[arg(long, help = "Progress span start, defaults to --start")]
    from: Option<GTime>,
    #[arg(long, help = "Progress span end, defaults to --end")]
    to: Option<GTime>,
    #[arg(long, default_value_t = 0, help = "Report the current epoch every N epochs, 0 to never report")]
    message_every: u64,
    #[arg(long, default_value_t = 0, help = "Pause after each epoch, in milliseconds")]
    delay_ms: u64,
    #[arg(short, long, help = "Do not draw a progress bar")]
    quiet: bool,
}

pub fn handle(command: Command, settings: Settings) -> Result<(), Error> {
    if command.step <= 0.0 || !(..=MAX_STEP).contains(&command.step) {
        return Err(Error::Step(command.step));
    }
    if command.end.diff(&command.start) < 0.0 {
        return Err(Error::Window {
            start: command.start,
            end: command.end,
        });
    }

    let tui = Arc::new(TuiOutput::default());
    let ctx = if command.quiet {
        Context::with_settings(TracingOutput, settings)
    } else {
        Context::with_settings(TracingOutput.chain(Arc::clone(&tui)), settings)
    };

    let epochs = replay(&ctx, &command);

    tui.finish();
    println!(
        "{} {epochs} epochs, {} - {}",
        "Replayed".green(),
        command.start,
        command.end
    );

    Ok(())
}

/// Drive `ctx` the way a post-processing loop would, returning the number
/// of epochs visited
fn replay(ctx: &Context, command: &Command) -> u64 {
    let delay = Duration::from_millis(command.delay_ms);

    ctx.set_span(
        command.from.unwrap_or(command.start),
        command.to.unwrap_or(command.end),
    );

    let mut epochs = 0;
    loop {
        // recompute from the start to avoid accumulating rounding
        let now = command.start.add(epochs as f64 * command.step);
        if now.diff(&command.end) > DTTOL {
            break;
        }

        ctx.update(now);

        if command.message_every > 0
            && epochs % command.message_every == 0
            && showmsg!(ctx, "processing : {now}").is_abort()
        {
            info!(%now, "Replay aborted");
            break;
        }

        epochs += 1;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    // flush whatever the UI still has pending
    showmsg!(ctx);

    info!(epochs, "Replay finished");
    epochs
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("epoch interval must be within (0, {max}] seconds, got {0}", max = MAX_STEP)]
    Step(f64),
    #[error("window ends ({end}) before it starts ({start})")]
    Window { start: GTime, end: GTime },
}
