// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{num::NonZeroU32, path::Path};

use serde::Deserialize;

/// Updates between two UI pumps unless configured otherwise
pub const DEFAULT_YIELD_PERIOD: NonZeroU32 = NonZeroU32::new(23).unwrap();

/// Tunables read from `rtkmon.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Every n-th [`crate::Context::update`] pumps the UI
    pub yield_period: NonZeroU32,
    /// Maximum diagnostic line length in bytes, unlimited if unset
    pub max_message_len: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            yield_period: DEFAULT_YIELD_PERIOD,
            max_message_len: None,
        }
    }
}

impl Settings {
    /// Load from `explicit`, or from the user config file if present
    pub fn load(explicit: Option<&Path>) -> Result<Self, config::Error> {
        config::resolve(crate::NAME, explicit)
    }
}
