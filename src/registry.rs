// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Capability registry
//!
//! The registry is built once, either explicitly with [`Registry::new`] and
//! passed to consumers, or through the memoized [`Registry::builtin`]. It is
//! immutable afterwards and can be shared between threads without locking.

use std::{
    collections::{HashMap, HashSet},
    slice,
    sync::LazyLock,
};

use crate::{
    capability::{CapabilityEntry, CapabilityOptions, Table},
    database::{ADDITIVES, AdditiveDeclaration, CAPABILITY_DATABASE, RAW_PATTERNS, RawDeclaration},
    movement::{MovementPolicy, MovementSet},
    pattern::{self, RawPattern},
};

static BUILTIN: LazyLock<Result<Registry, BuildError>> = LazyLock::new(Registry::new);

/// Errors reported by registry lookups
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The name is not present in the table
    #[error("{name} not found in {table}")]
    NotFound { table: Table, name: String },
}

/// Errors reported when building a registry from its tables
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BuildError {
    /// A name is declared twice in the same table
    #[error("Duplicate {name} in {table}")]
    DuplicateName { table: Table, name: &'static str },
    /// Capture groups of the pattern disagree with `nparams`
    #[error("{name} declares {nparams} parameters, pattern has {groups} groups")]
    ParameterMismatch {
        name: &'static str,
        nparams: u8,
        groups: usize,
    },
    /// `match_optional` used without exactly one parameter
    #[error("{name} has an optional parameter but not exactly one parameter")]
    OptionalWithoutSingleParameter { name: &'static str },
    /// `numeric` refers to a parameter that does not exist
    #[error("{name} marks parameter {index} numeric, outside of declared parameters")]
    NumericOutOfRange { name: &'static str, index: u8 },
    /// Additive capability refers to an unknown capability
    #[error("{name} is related to unknown capability {related}")]
    UnknownRelated {
        name: &'static str,
        related: &'static str,
    },
    /// A pattern does not compile
    #[error(transparent)]
    Pattern(#[from] pattern::Error),
}

/// Declaration of a synthetic capability
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdditiveSpec {
    pub name: &'static str,
    /// Capability this one refines, empty if none
    pub related: &'static str,
    /// Literal prefix, escaped when compiled
    pub literal: &'static str,
    /// Regular expression appended to the escaped prefix
    pub suffix: &'static str,
}

impl From<AdditiveDeclaration> for AdditiveSpec {
    fn from((name, related, literal, suffix): AdditiveDeclaration) -> Self {
        Self {
            name,
            related,
            literal,
            suffix,
        }
    }
}

/// Synthetic capability with no terminfo equivalent, or a stricter variant
/// of an existing one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdditiveCapability {
    pub name: &'static str,
    pub related: Option<&'static str>,
    pub pattern: RawPattern,
}

/// Registry construction options
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Which movement list to use
    pub movement: MovementPolicy,
    /// Additive capabilities appended after the built-in ones
    pub extra_additives: Vec<AdditiveSpec>,
}

/// Sequence recognized by one of the registry patterns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceMatch<'t> {
    pub name: &'static str,
    /// Table the matching pattern comes from
    pub source: Table,
    /// Matched prefix of the input
    pub text: &'t str,
    /// One element per parameter, `None` for an absent optional parameter
    pub params: Vec<Option<&'t str>>,
    /// Options of the matching capability, empty for additives
    pub options: CapabilityOptions,
    /// Related capability for additives
    pub related: Option<&'static str>,
}

impl SequenceMatch<'_> {
    /// Parse the parameter marked as numeric
    ///
    /// Additive capabilities use the options of their related capability.
    /// Returns `None` when no parameter is numeric, the parameter is absent,
    /// or its digits do not fit in `u32`.
    #[must_use]
    pub fn numeric(&self, registry: &Registry) -> Option<u32> {
        let index = match self.options.numeric {
            Some(index) => index,
            None => registry.lookup(self.related?).ok()?.options.numeric?,
        };
        let param = self.params.get(usize::from(index).checked_sub(1)?)?;
        param.as_ref()?.parse().ok()
    }

    fn is_specific(&self) -> bool {
        !self.options.match_any
    }
}

/// Ordered, immutable capability tables
#[derive(Clone, Debug)]
pub struct Registry {
    entries: Vec<CapabilityEntry>,
    index: HashMap<&'static str, usize>,
    raw: Vec<(&'static str, RawPattern)>,
    raw_index: HashMap<&'static str, usize>,
    additives: Vec<AdditiveCapability>,
    movement: MovementSet,
}

impl Registry {
    /// Build the registry from the built-in tables with default options
    pub fn new() -> Result<Self, BuildError> {
        Self::with_options(Options::default())
    }

    /// Build the registry from the built-in tables
    pub fn with_options(options: Options) -> Result<Self, BuildError> {
        Self::from_tables(CAPABILITY_DATABASE, RAW_PATTERNS, ADDITIVES, options)
    }

    /// Registry built from the built-in tables, shared by the whole process
    pub fn builtin() -> Result<&'static Self, BuildError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Build a registry from custom tables
    ///
    /// All patterns are compiled and all tables validated here, later calls
    /// cannot fail except for missing names.
    pub fn from_tables(
        entries: &[CapabilityEntry],
        raw: &[RawDeclaration],
        additives: &[AdditiveDeclaration],
        options: Options,
    ) -> Result<Self, BuildError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.name, position).is_some() {
                return Err(BuildError::DuplicateName {
                    table: Table::Database,
                    name: entry.name,
                });
            }
            check_options(entry)?;
        }

        let mut raw_patterns = Vec::with_capacity(raw.len());
        let mut raw_index = HashMap::with_capacity(raw.len());
        for &(name, literal, suffix) in raw {
            if raw_index.insert(name, raw_patterns.len()).is_some() {
                return Err(BuildError::DuplicateName {
                    table: Table::Raw,
                    name,
                });
            }
            let pattern = RawPattern::compile(name, literal, suffix)?;
            if let Some(&position) = index.get(name) {
                check_parameters(&entries[position], &pattern)?;
            }
            raw_patterns.push((name, pattern));
        }

        let specs: Vec<AdditiveSpec> = additives
            .iter()
            .copied()
            .map(AdditiveSpec::from)
            .chain(options.extra_additives)
            .collect();
        let additive_names: HashSet<&str> = specs.iter().map(|spec| spec.name).collect();
        let mut additive_entries: Vec<AdditiveCapability> = Vec::with_capacity(specs.len());
        for spec in &specs {
            if additive_entries.iter().any(|known| known.name == spec.name) {
                return Err(BuildError::DuplicateName {
                    table: Table::Additive,
                    name: spec.name,
                });
            }
            let related = (!spec.related.is_empty()).then_some(spec.related);
            if let Some(related) = related
                && !index.contains_key(related)
                && !additive_names.contains(related)
            {
                return Err(BuildError::UnknownRelated {
                    name: spec.name,
                    related,
                });
            }
            additive_entries.push(AdditiveCapability {
                name: spec.name,
                related,
                pattern: RawPattern::compile(spec.name, spec.literal, spec.suffix)?,
            });
        }

        let registry = Self {
            entries: entries.to_vec(),
            index,
            raw: raw_patterns,
            raw_index,
            additives: additive_entries,
            movement: MovementSet::new(options.movement),
        };

        for name in registry.dangling_movement_names() {
            tracing::warn!(name, "movement capability does not resolve to any table");
        }
        tracing::debug!(
            entries = registry.entries.len(),
            raw = registry.raw.len(),
            additives = registry.additives.len(),
            movement = ?options.movement,
            "capability registry built"
        );

        Ok(registry)
    }

    /// Find a capability in the primary table
    pub fn lookup(&self, name: &str) -> Result<&CapabilityEntry, Error> {
        match self.index.get(name) {
            Some(&position) => Ok(&self.entries[position]),
            None => Err(not_found(Table::Database, name)),
        }
    }

    /// Find the fallback pattern of a capability
    ///
    /// Independent of [`Registry::lookup`], a name may be present in one table
    /// and missing in the other.
    pub fn raw_pattern_for(&self, name: &str) -> Result<&RawPattern, Error> {
        match self.raw_index.get(name) {
            Some(&position) => Ok(&self.raw[position].1),
            None => Err(not_found(Table::Raw, name)),
        }
    }

    /// Find an additive capability by name
    pub fn additive(&self, name: &str) -> Result<&AdditiveCapability, Error> {
        self.additives
            .iter()
            .find(|additive| additive.name == name)
            .ok_or_else(|| not_found(Table::Additive, name))
    }

    /// Additive capabilities in declaration order, resolved after the primary
    /// table and the raw patterns
    #[must_use]
    pub fn additive_entries(&self) -> &[AdditiveCapability] {
        &self.additives
    }

    /// Whether emitting the capability moves the cursor
    #[must_use]
    pub fn causes_movement(&self, name: &str) -> bool {
        self.movement.contains(name)
    }

    #[must_use]
    pub const fn movement_names(&self) -> &MovementSet {
        &self.movement
    }

    /// Primary table in declaration order
    #[must_use]
    pub fn entries(&self) -> &[CapabilityEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, CapabilityEntry> {
        self.entries.iter()
    }

    /// Raw patterns in declaration order
    pub fn raw_patterns(&self) -> impl Iterator<Item = (&'static str, &RawPattern)> {
        self.raw.iter().map(|(name, pattern)| (*name, pattern))
    }

    /// Whether the name is known to any of the tables
    #[must_use]
    pub fn resolves(&self, name: &str) -> bool {
        self.index.contains_key(name)
            || self.raw_index.contains_key(name)
            || self.additives.iter().any(|additive| additive.name == name)
    }

    /// Movement names that are not present in any table
    #[must_use]
    pub fn dangling_movement_names(&self) -> Vec<&'static str> {
        self.movement
            .iter()
            .filter(|name| !self.resolves(name))
            .collect()
    }

    /// All sequences matching the start of `text`, in precedence order
    ///
    /// Capabilities of the primary table that have a fallback pattern come
    /// first, then raw patterns without a primary entry. This walk stops after
    /// the first match of a capability without `match_any`. Every matching
    /// additive is appended afterwards, so additives can refine a sequence the
    /// primary table already recognizes.
    #[must_use]
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<SequenceMatch<'t>> {
        let mut found = Vec::new();
        self.primary_candidates(text, &mut found);

        for additive in &self.additives {
            if let Some(captured) = additive.pattern.captures(text) {
                found.push(SequenceMatch {
                    name: additive.name,
                    source: Table::Additive,
                    text: captured.text,
                    params: captured.params,
                    options: CapabilityOptions::NONE,
                    related: additive.related,
                });
            }
        }

        found
    }

    fn primary_candidates<'t>(&self, text: &'t str, found: &mut Vec<SequenceMatch<'t>>) {
        for entry in &self.entries {
            let Some(&position) = self.raw_index.get(entry.name) else {
                continue;
            };
            let pattern = &self.raw[position].1;
            let Some(captured) = pattern.captures(text) else {
                continue;
            };
            found.push(SequenceMatch {
                name: entry.name,
                source: Table::Raw,
                text: captured.text,
                params: captured.params,
                options: entry.options,
                related: None,
            });
            if !entry.options.match_any {
                return;
            }
        }

        let unlisted = self
            .raw
            .iter()
            .filter(|(name, _)| !self.index.contains_key(name));
        for (name, pattern) in unlisted {
            if let Some(captured) = pattern.captures(text) {
                found.push(SequenceMatch {
                    name: *name,
                    source: Table::Raw,
                    text: captured.text,
                    params: captured.params,
                    options: CapabilityOptions::NONE,
                    related: None,
                });
                return;
            }
        }
    }

    /// Best sequence matching the start of `text`
    ///
    /// The longest match wins. On equal length a capability without
    /// `match_any` wins over one with it, then the earlier one.
    #[must_use]
    pub fn match_sequence<'t>(&self, text: &'t str) -> Option<SequenceMatch<'t>> {
        let mut best: Option<SequenceMatch<'t>> = None;
        for candidate in self.candidates(text) {
            let better = match &best {
                None => true,
                Some(current) => {
                    (candidate.text.len(), candidate.is_specific())
                        > (current.text.len(), current.is_specific())
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a CapabilityEntry;
    type IntoIter = slice::Iter<'a, CapabilityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn not_found(table: Table, name: &str) -> Error {
    tracing::trace!(%table, name, "capability not found");
    Error::NotFound {
        table,
        name: name.to_owned(),
    }
}

fn check_options(entry: &CapabilityEntry) -> Result<(), BuildError> {
    let options = &entry.options;
    if options.match_optional && options.nparams != Some(1) {
        return Err(BuildError::OptionalWithoutSingleParameter { name: entry.name });
    }
    if let Some(index) = options.numeric
        && (index == 0 || index > options.nparams.unwrap_or(0))
    {
        return Err(BuildError::NumericOutOfRange {
            name: entry.name,
            index,
        });
    }
    Ok(())
}

fn check_parameters(entry: &CapabilityEntry, pattern: &RawPattern) -> Result<(), BuildError> {
    match entry.options.nparams {
        Some(nparams) if usize::from(nparams) != pattern.group_count() => {
            Err(BuildError::ParameterMismatch {
                name: entry.name,
                nparams,
                groups: pattern.group_count(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use collection_literals::collection;

    use super::*;

    fn registry() -> &'static Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn lookup_cursor_left() {
        let entry = registry().lookup("cursor_left").unwrap();
        assert_eq!(entry.terminfo_code, "cub1");
        assert_eq!(entry.options, CapabilityOptions::NONE);
        assert_eq!(registry().raw_pattern_for("cursor_left").unwrap().as_str(), "\x08");
        assert!(registry().causes_movement("cursor_left"));
    }

    #[test]
    fn lookup_missing() {
        assert_eq!(
            registry().lookup("not_a_real_capability"),
            Err(Error::NotFound {
                table: Table::Database,
                name: "not_a_real_capability".to_owned(),
            })
        );
    }

    #[test]
    fn lookup_is_repeatable() {
        let first = registry().lookup("set_a_foreground").unwrap();
        let second = registry().lookup("set_a_foreground").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.options,
            CapabilityOptions::params(1).match_any().numeric(1)
        );
    }

    #[test]
    fn tables_are_independent() {
        assert!(registry().lookup("clear_screen").is_ok());
        assert!(matches!(
            registry().raw_pattern_for("clear_screen"),
            Err(Error::NotFound {
                table: Table::Raw,
                ..
            })
        ));
        assert!(registry().lookup("color256").is_err());
        assert!(registry().additive("color256").is_ok());
    }

    #[test]
    fn attributes_pattern() {
        let pattern = registry().raw_pattern_for("set_a_attributes2").unwrap();
        let captured = pattern.captures("\x1b[1;4m").unwrap();
        assert_eq!(captured.text, "\x1b[1;4m");
        assert_eq!(captured.params, [Some("1"), Some("4")]);
        assert!(!pattern.is_match("\x1b[1m"));
        assert!(!pattern.is_match("\x1b[1;4;5m"));
    }

    #[test]
    fn color256_additive() {
        let additive = registry().additive("color256").unwrap();
        assert_eq!(additive.related, Some("color"));
        let captured = additive.pattern.captures("\x1b[38;5;196m").unwrap();
        assert_eq!(captured.params, [Some("196")]);
    }

    #[test]
    fn additive_order() {
        let names: Vec<_> = registry()
            .additive_entries()
            .iter()
            .map(|additive| additive.name)
            .collect();
        assert_eq!(
            names,
            ["color256", "shift_in", "shift_out", "sgr0", "backspace", "ascii_tab"]
        );
    }

    #[test]
    fn no_dangling_movement() {
        assert!(registry().dangling_movement_names().is_empty());
    }

    #[test]
    fn legacy_movement_dangles() {
        let registry = Registry::with_options(Options {
            movement: MovementPolicy::Legacy,
            ..Options::default()
        })
        .unwrap();
        assert_eq!(
            registry.dangling_movement_names(),
            ["backspacecarriage_return"]
        );
        assert!(!registry.causes_movement("carriage_return"));
    }

    #[test]
    fn candidates_stop_at_specific() {
        let names: Vec<_> = registry()
            .candidates("\x1b[7m")
            .iter()
            .map(|candidate| candidate.name)
            .collect();
        assert_eq!(names, ["set_a_attributes1"]);

        let names: Vec<_> = registry()
            .candidates("\x1b[C")
            .iter()
            .map(|candidate| candidate.name)
            .collect();
        assert_eq!(names, ["cursor_right"]);
    }

    #[test]
    fn additives_follow_specific_match() {
        let names = |text: &str| -> Vec<&'static str> {
            registry()
                .candidates(text)
                .iter()
                .map(|candidate| candidate.name)
                .collect()
        };
        assert_eq!(names("\x1b[m"), ["exit_attribute_mode", "sgr0"]);
        assert_eq!(names("\x08"), ["cursor_left", "backspace"]);
        assert_eq!(names("\t"), ["tab", "ascii_tab"]);

        let best = registry().match_sequence("\x1b[m").unwrap();
        assert_eq!(best.name, "exit_attribute_mode");
    }

    #[test]
    fn extra_additive_overlapping_primary() {
        let registry = Registry::with_options(Options {
            extra_additives: vec![AdditiveSpec {
                name: "cursor_report_long",
                related: "",
                literal: "\x1b",
                suffix: r"\[([0-9]+);([0-9]+)R\x07",
            }],
            ..Options::default()
        })
        .unwrap();
        let names: Vec<_> = registry
            .candidates("\x1b[3;4R\x07")
            .iter()
            .map(|candidate| candidate.name)
            .collect();
        assert_eq!(names, ["cursor_report", "cursor_report_long"]);
        let best = registry.match_sequence("\x1b[3;4R\x07").unwrap();
        assert_eq!(best.name, "cursor_report_long");
    }

    #[test]
    fn raw_pattern_without_primary_entry() {
        let entries = [CapabilityEntry::new(
            "cursor_right",
            "cuf1",
            CapabilityOptions::NONE,
        )];
        let registry = Registry::from_tables(
            &entries,
            &[
                ("cursor_right", "\x1b", r"\[C"),
                ("alignment_test", "\x1b#8", ""),
            ],
            &[],
            Options::default(),
        )
        .unwrap();
        let candidates = registry.candidates("\x1b#8");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "alignment_test");
        assert_eq!(candidates[0].source, Table::Raw);
        assert_eq!(candidates[0].options, CapabilityOptions::NONE);
        assert!(registry.lookup("alignment_test").is_err());
    }

    #[test]
    fn non_ascii_digits_rejected() {
        assert_eq!(registry().match_sequence("\x1b[38;5;\u{663}m"), None);
        assert_eq!(registry().match_sequence("\x1b[\u{661};4m"), None);
    }

    #[test]
    fn numeric_overflow() {
        let best = registry().match_sequence("\x1b[38;5;99999999999m").unwrap();
        assert_eq!(best.name, "color256");
        assert_eq!(best.params, [Some("99999999999")]);
        assert_eq!(best.numeric(registry()), None);
    }

    #[test]
    fn candidates_continue_after_match_any() {
        let candidates = registry().candidates("\x1b[38;5;21m");
        let names: Vec<_> = candidates.iter().map(|candidate| candidate.name).collect();
        assert_eq!(names, ["set_a_attributes3", "color256"]);

        let best = registry().match_sequence("\x1b[38;5;21m").unwrap();
        assert_eq!(best.name, "color256");
        assert_eq!(best.source, Table::Additive);
        assert_eq!(best.numeric(registry()), Some(21));
    }

    #[test]
    fn optional_parameter_match() {
        let best = registry().match_sequence("\x1b[7mtext").unwrap();
        assert_eq!(best.name, "set_a_attributes1");
        assert_eq!(best.text, "\x1b[7m");
        assert_eq!(best.params, [Some("7")]);
        assert_eq!(best.numeric(registry()), None);
    }

    #[test]
    fn cursor_report_match() {
        let best = registry().match_sequence("\x1b[24;80R").unwrap();
        assert_eq!(best.name, "cursor_report");
        assert_eq!(best.params, [Some("24"), Some("80")]);
    }

    #[test]
    fn control_bytes_match() {
        let expected: BTreeMap<&str, &str> = collection! {
            "\x07" => "bell",
            "\r" => "carriage_return",
            "\x08" => "cursor_left",
            "\n" => "scroll_forward",
            "\t" => "tab",
            "\x0e" => "shift_out",
            "\x0f" => "shift_in",
        };
        let actual: BTreeMap<&str, &str> = expected
            .keys()
            .map(|text| (*text, registry().match_sequence(text).unwrap().name))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn unknown_sequence() {
        assert_eq!(registry().match_sequence("plain text"), None);
        assert!(registry().candidates("").is_empty());
    }

    #[test]
    fn extra_additive() {
        let registry = Registry::with_options(Options {
            extra_additives: vec![AdditiveSpec {
                name: "on_color256",
                related: "set_a_background",
                literal: "\x1b",
                suffix: r"\[48;5;(\d+)m",
            }],
            ..Options::default()
        })
        .unwrap();
        assert_eq!(registry.additive_entries().len(), 7);
        let best = registry.match_sequence("\x1b[48;5;9m").unwrap();
        assert_eq!(best.name, "on_color256");
        assert_eq!(best.numeric(&registry), Some(9));
    }

    #[test]
    fn duplicate_additive() {
        let result = Registry::with_options(Options {
            extra_additives: vec![AdditiveSpec {
                name: "shift_in",
                related: "",
                literal: "\x0f",
                suffix: "",
            }],
            ..Options::default()
        });
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateName {
                table: Table::Additive,
                name: "shift_in",
            }
        );
    }

    #[test]
    fn unknown_related() {
        let result = Registry::from_tables(
            &[],
            &[],
            &[("color256", "color", "\x1b", r"\[38;5;(\d+)m")],
            Options::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownRelated {
                name: "color256",
                related: "color",
            }
        );
    }

    #[test]
    fn parameter_mismatch() {
        let entries = [CapabilityEntry::new(
            "cursor_report",
            "u6",
            CapabilityOptions::params(2),
        )];
        let result = Registry::from_tables(
            &entries,
            &[("cursor_report", "\x1b", r"\[(\d+)R")],
            &[],
            Options::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            BuildError::ParameterMismatch {
                name: "cursor_report",
                nparams: 2,
                groups: 1,
            }
        );
    }

    #[test]
    fn duplicate_entry() {
        let entries = [
            CapabilityEntry::new("bell", "bel", CapabilityOptions::NONE),
            CapabilityEntry::new("bell", "bel", CapabilityOptions::NONE),
        ];
        let result = Registry::from_tables(&entries, &[], &[], Options::default());
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateName {
                table: Table::Database,
                name: "bell",
            }
        );
    }

    #[test]
    fn invalid_options() {
        let optional = [CapabilityEntry::new(
            "set_a_attributes2",
            "sgr1",
            CapabilityOptions::params(2).match_optional(),
        )];
        assert_eq!(
            Registry::from_tables(&optional, &[], &[], Options::default()).unwrap_err(),
            BuildError::OptionalWithoutSingleParameter {
                name: "set_a_attributes2"
            }
        );

        let numeric = [CapabilityEntry::new(
            "color",
            "_foreground_color",
            CapabilityOptions::params(1).numeric(2),
        )];
        assert_eq!(
            Registry::from_tables(&numeric, &[], &[], Options::default()).unwrap_err(),
            BuildError::NumericOutOfRange {
                name: "color",
                index: 2
            }
        );
    }

    #[test]
    fn invalid_pattern() {
        let result = Registry::from_tables(
            &[],
            &[("broken", "\x1b", r"\[(\d+")],
            &[],
            Options::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            BuildError::Pattern(pattern::Error::Invalid { name: "broken", .. })
        ));
    }

    #[test]
    fn shared_between_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let registry = Registry::builtin().unwrap();
                    registry.lookup("tab").unwrap().terminfo_code
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "ht");
        }
    }
}
