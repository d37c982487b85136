// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use gtime::GTime;

/// The window of time that maps onto 0% to 100% progress
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Span {
    pub start: GTime,
    pub end: GTime,
}

impl Span {
    pub const UNSET: Self = Self {
        start: GTime::UNSET,
        end: GTime::UNSET,
    };

    pub fn new(start: GTime, end: GTime) -> Self {
        Self { start, end }
    }

    /// Seconds from start to end, negative when inverted
    pub fn duration(&self) -> f64 {
        self.end.diff(&self.start)
    }

    /// Both ends set and `end` strictly after `start`
    pub fn is_valid(&self) -> bool {
        !self.start.is_unset() && !self.end.is_unset() && self.duration() > 0.0
    }

    /// Percentage of the span elapsed at `now`
    ///
    /// Not clamped: times outside the span give values below 0 or above 100.
    /// Returns `None` for an invalid span.
    pub fn percent(&self, now: GTime) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }

        Some(now.diff(&self.start) / self.duration() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn at(offset: f64) -> GTime {
        GTime::new(T0, 0.0).add(offset)
    }

    #[test]
    fn halfway() {
        let span = Span::new(at(0.0), at(10.0));
        let percent = span.percent(at(5.0)).unwrap();
        assert!((percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn unclamped_outside_span() {
        let span = Span::new(at(0.0), at(10.0));
        assert!((span.percent(at(15.0)).unwrap() - 150.0).abs() < 1e-9);
        assert!((span.percent(at(-5.0)).unwrap() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_spans() {
        assert!(!Span::default().is_valid());
        assert_eq!(Span::UNSET.percent(at(1.0)), None);

        // degenerate
        assert_eq!(Span::new(at(0.0), at(0.0)).percent(at(1.0)), None);
        // inverted
        assert_eq!(Span::new(at(10.0), at(0.0)).percent(at(5.0)), None);
        // one end unset
        assert_eq!(Span::new(GTime::UNSET, at(10.0)).percent(at(5.0)), None);
        assert_eq!(Span::new(at(0.0), GTime::UNSET).percent(at(5.0)), None);
    }

    #[test]
    fn sub_second_span() {
        let span = Span::new(at(0.0), at(0.5));
        assert!(span.is_valid());
        assert!((span.percent(at(0.125)).unwrap() - 25.0).abs() < 1e-9);
    }
}
