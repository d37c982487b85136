// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Terminal presentation helpers shared by the binaries

use std::fmt::Display;

use crossterm::style::{self, Stylize};

pub use crossterm::style::StyledContent;
pub use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Colour and emphasis for anything printable
pub trait Styled: Display + Sized {
    fn red(self) -> StyledContent<Self> {
        Stylize::red(style::style(self))
    }

    fn green(self) -> StyledContent<Self> {
        Stylize::green(style::style(self))
    }

    fn blue(self) -> StyledContent<Self> {
        Stylize::blue(style::style(self))
    }

    fn yellow(self) -> StyledContent<Self> {
        Stylize::yellow(style::style(self))
    }

    fn bold(self) -> StyledContent<Self> {
        Stylize::bold(style::style(self))
    }

    fn dim(self) -> StyledContent<Self> {
        Stylize::dim(style::style(self))
    }
}

impl<T: Display> Styled for T {}
