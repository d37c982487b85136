use arc_swap::ArcSwapOption;
use gtime::GTime;
use tui::{ProgressBar, ProgressDrawTarget, ProgressStyle, Styled};

use crate::{Span, output};

/// Bar resolution, one step per 0.1%
const STEPS: u64 = 1000;

/// Progress bar on stderr
#[derive(Debug, Default)]
pub struct TuiOutput {
    // ArcSwap provides lock-free safe usage in sync & async environments
    pb: ArcSwapOption<ProgressBar>,
}

impl output::Emitter for TuiOutput {
    fn emit(&self, event: &output::Event<'_>) {
        match event {
            output::Event::SpanSet(span) => self.start(span),
            output::Event::Progress { now, percent } => self.progress(now, *percent),
            output::Event::Pump => {
                if let Some(pb) = self.pb.load().as_deref() {
                    pb.tick();
                }
            }
            // the line itself is written by the context, inside `suspend`
            output::Event::Message(_) => {}
        }
    }

    fn suspend(&self, f: &mut dyn FnMut()) {
        match self.pb.load().as_deref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl TuiOutput {
    /// Complete and remove the current bar, if any
    pub fn finish(&self) {
        if let Some(pb) = self.pb.swap(None) {
            pb.finish();
        }
    }

    fn start(&self, span: &Span) {
        // a new span always replaces the old bar
        if let Some(pb) = self.pb.swap(None) {
            pb.finish_and_clear();
        }

        if !span.is_valid() {
            return;
        }

        let pb = ProgressBar::with_draw_target(Some(STEPS), ProgressDrawTarget::stderr()).with_style(
            ProgressStyle::with_template(" {prefix} |{bar:30.cyan/blue}| {msg}")
                .unwrap()
                .progress_chars("■≡=- "),
        );
        pb.set_prefix(format!("{}", "Processing".blue()));
        pb.set_message(format!("{} - {}", span.start, span.end).dim().to_string());

        self.pb.store(Some(pb.into()));
    }

    fn progress(&self, now: &GTime, percent: f64) {
        let Some(pb) = self.pb.load_full() else {
            return;
        };

        let position = (percent / 100.0 * STEPS as f64).clamp(0.0, STEPS as f64);
        pb.set_position(position as u64);
        pb.set_message(format!("{now} {}", format!("{percent:>5.1}%").bold()));
    }
}
