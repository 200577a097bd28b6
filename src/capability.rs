// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Capability records

use std::fmt;

/// Matching hints attached to a capability
///
/// All fields default to absent or `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapabilityOptions {
    /// Number of positional parameters the sequence accepts
    pub nparams: Option<u8>,
    /// Entry may match even when a more specific entry also matches
    pub match_any: bool,
    /// The sole parameter may be absent from matched text
    pub match_optional: bool,
    /// 1-based index of the parameter holding a number, such as a color index
    pub numeric: Option<u8>,
}

impl CapabilityOptions {
    /// Options with nothing set
    pub const NONE: Self = Self {
        nparams: None,
        match_any: false,
        match_optional: false,
        numeric: None,
    };

    /// Options for a sequence taking `nparams` parameters
    #[must_use]
    pub const fn params(nparams: u8) -> Self {
        Self {
            nparams: Some(nparams),
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn match_any(self) -> Self {
        Self {
            match_any: true,
            ..self
        }
    }

    #[must_use]
    pub const fn match_optional(self) -> Self {
        Self {
            match_optional: true,
            ..self
        }
    }

    #[must_use]
    pub const fn numeric(self, index: u8) -> Self {
        Self {
            numeric: Some(index),
            ..self
        }
    }
}

/// Entry of the primary capability table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityEntry {
    /// Descriptive name, unique within the registry
    pub name: &'static str,
    /// Code used to query the terminfo database
    pub terminfo_code: &'static str,
    pub options: CapabilityOptions,
}

impl CapabilityEntry {
    #[must_use]
    pub const fn new(
        name: &'static str,
        terminfo_code: &'static str,
        options: CapabilityOptions,
    ) -> Self {
        Self {
            name,
            terminfo_code,
            options,
        }
    }
}

/// Tables held by the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    /// Named capabilities with terminfo codes
    Database,
    /// Fallback sequence patterns
    Raw,
    /// Synthetic capabilities without terminfo equivalent
    Additive,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Database => "capability database",
            Self::Raw => "raw patterns",
            Self::Additive => "additive capabilities",
        };
        f.write_str(name)
    }
}
