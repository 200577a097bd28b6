// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered registry of terminal capabilities
//!
//! Maps descriptive capability names such as `cursor_left` to terminfo codes
//! and matching hints, and keeps fallback sequence patterns for terminals
//! whose database entry is missing or too generic.

pub mod capability;
pub mod database;
pub mod movement;
pub mod pattern;
pub mod registry;

pub use capability::{CapabilityEntry, CapabilityOptions, Table};
pub use movement::{MovementPolicy, MovementSet};
pub use pattern::RawPattern;
pub use registry::{AdditiveCapability, AdditiveSpec, Options, Registry, SequenceMatch};
