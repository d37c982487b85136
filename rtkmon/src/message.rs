// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// What a long running operation should do after reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum Flow {
    #[default]
    Continue = 0,
    /// Reserved, never produced by [`crate::Context::report`]
    Abort = 1,
}

impl Flow {
    /// Numeric signal, `0` to continue and non-zero to abort
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_abort(self) -> bool {
        self != Flow::Continue
    }
}

/// Render a diagnostic line, cut to `limit` bytes if given
pub(crate) fn render(args: fmt::Arguments<'_>, limit: Option<usize>) -> String {
    let mut line = fmt::format(args);
    if let Some(limit) = limit {
        truncate(&mut line, limit);
    }
    line
}

/// Cut to at most `limit` bytes without splitting a character
fn truncate(line: &mut String, limit: usize) {
    if line.len() <= limit {
        return;
    }

    let mut end = limit;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_codes() {
        assert_eq!(Flow::default(), Flow::Continue);
        assert_eq!(Flow::Continue.code(), 0);
        assert_ne!(Flow::Abort.code(), 0);
        assert!(Flow::Abort.is_abort());
        assert!(!Flow::Continue.is_abort());
    }

    #[test]
    fn empty_arguments_still_render() {
        assert_eq!(render(format_args!("{}", ""), None), "");
        assert_eq!(render(format_args!(""), None), "");
    }

    #[test]
    fn interpolates() {
        assert_eq!(render(format_args!("x={}", 5), None), "x=5");
        assert_eq!(render(format_args!("{:.1}% Q={}", 42.26, 1), None), "42.3% Q=1");
    }

    #[test]
    fn long_lines_are_kept_whole() {
        let long = "e".repeat(4096);
        assert_eq!(render(format_args!("{long}"), None).len(), 4096);
    }

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(render(format_args!("abcdef"), Some(4)), "abcd");
        // 'é' is two bytes, a limit of 2 lands inside it
        assert_eq!(render(format_args!("aé"), Some(2)), "a");
        assert_eq!(render(format_args!("abc"), Some(10)), "abc");
    }
}
