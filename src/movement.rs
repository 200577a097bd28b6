// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Capabilities that change the cursor position

use std::collections::BTreeSet;

use crate::database::{CAUSE_MOVEMENT, CAUSE_MOVEMENT_LEGACY};

/// Choice of movement list
///
/// The historical list fused `backspace` and `carriage_return` into the single
/// name `backspacecarriage_return`, so neither capability was reported as
/// moving the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementPolicy {
    /// `backspace` and `carriage_return` are separate entries
    #[default]
    Corrected,
    /// Keep the fused name for parity with the historical list
    Legacy,
}

impl MovementPolicy {
    const fn names(self) -> &'static [&'static str] {
        match self {
            Self::Corrected => CAUSE_MOVEMENT,
            Self::Legacy => CAUSE_MOVEMENT_LEGACY,
        }
    }
}

/// Set of capability names that move the cursor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovementSet {
    names: BTreeSet<&'static str>,
}

impl MovementSet {
    #[must_use]
    pub fn new(policy: MovementPolicy) -> Self {
        Self {
            names: policy.names().iter().copied().collect(),
        }
    }

    /// Whether emitting `name` invalidates the known cursor position
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in lexical order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
