// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compiled escape sequence patterns

use regex::Regex;

/// Errors reported when compiling a pattern
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The regular expression does not compile
    #[error("Invalid pattern for {name}: {source}")]
    Invalid {
        name: &'static str,
        source: regex::Error,
    },
}

/// Sequence pattern for a capability
///
/// The source text is an escaped literal, optionally followed by regular
/// expression syntax with one capture group per parameter. Matching is always
/// anchored at the start of the input.
#[derive(Clone, Debug)]
pub struct RawPattern {
    source: String,
    regex: Regex,
    group_count: usize,
}

/// Text matched by a pattern and its parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captured<'t> {
    /// Matched prefix of the input
    pub text: &'t str,
    /// One element per capture group, `None` for an absent optional parameter
    pub params: Vec<Option<&'t str>>,
}

impl RawPattern {
    /// Compile a pattern from a literal prefix and a regular expression suffix
    ///
    /// The prefix is escaped, the suffix is used as is.
    pub fn compile(name: &'static str, literal: &str, suffix: &str) -> Result<Self, Error> {
        let source = format!("{}{suffix}", regex::escape(literal));
        let regex = Regex::new(&format!(r"\A(?:{source})"))
            .map_err(|source| Error::Invalid { name, source })?;
        let group_count = regex.captures_len() - 1;
        Ok(Self {
            source,
            regex,
            group_count,
        })
    }

    /// Pattern text without the start anchor
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of capture groups, which is the number of parameters
    #[must_use]
    pub const fn group_count(&self) -> usize {
        self.group_count
    }

    /// Match the pattern at the start of `text`
    #[must_use]
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captured<'t>> {
        let captures = self.regex.captures(text)?;
        let whole = captures.get(0)?;
        let params = captures
            .iter()
            .skip(1)
            .map(|group| group.map(|group| group.as_str()))
            .collect();
        Some(Captured {
            text: whole.as_str(),
            params,
        })
    }

    /// Check whether `text` starts with this pattern
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for RawPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RawPattern {}
