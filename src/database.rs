// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Built-in capability tables
//!
//! The order of [`CAPABILITY_DATABASE`] is the matching precedence. Patterns are
//! declared as a literal prefix, escaped when compiled, followed by a regular
//! expression suffix whose capture groups are the sequence parameters. Digits
//! are matched with `[0-9]`, ASCII only.

use crate::capability::{CapabilityEntry, CapabilityOptions};

const NONE: CapabilityOptions = CapabilityOptions::NONE;

const fn params(nparams: u8) -> CapabilityOptions {
    CapabilityOptions::params(nparams)
}

const fn entry(
    name: &'static str,
    terminfo_code: &'static str,
    options: CapabilityOptions,
) -> CapabilityEntry {
    CapabilityEntry::new(name, terminfo_code, options)
}

/// Fallback pattern declaration: name, literal prefix, regex suffix
pub type RawDeclaration = (&'static str, &'static str, &'static str);

/// Additive declaration: name, related capability, literal prefix, regex suffix
pub type AdditiveDeclaration = (&'static str, &'static str, &'static str, &'static str);

pub const CAPABILITY_DATABASE: &[CapabilityEntry] = &[
    entry("bell", "bel", NONE),
    entry("carriage_return", "cr", NONE),
    entry("change_scroll_region", "csr", params(2)),
    entry("clear_all_tabs", "tbc", NONE),
    entry("clear_screen", "clear", NONE),
    entry("clr_bol", "el1", NONE),
    entry("clr_eol", "el", NONE),
    entry("clr_eos", "clear_eos", NONE),
    entry("column_address", "hpa", params(1)),
    entry("cursor_address", "cup", params(2)),
    entry("cursor_down", "cud1", NONE),
    entry("cursor_home", "home", NONE),
    entry("cursor_invisible", "civis", NONE),
    entry("cursor_left", "cub1", NONE),
    entry("cursor_normal", "cnorm", NONE),
    entry("cursor_report", "u6", params(2)),
    entry("cursor_right", "cuf1", NONE),
    entry("cursor_up", "cuu1", NONE),
    entry("cursor_visible", "cvvis", NONE),
    entry("delete_character", "dch1", NONE),
    entry("delete_line", "dl1", NONE),
    entry("enter_blink_mode", "blink", NONE),
    entry("enter_bold_mode", "bold", NONE),
    entry("enter_dim_mode", "dim", NONE),
    entry("enter_fullscreen", "smcup", NONE),
    entry("enter_standout_mode", "standout", NONE),
    entry("enter_superscript_mode", "superscript", NONE),
    entry("enter_susimpleript_mode", "susimpleript", NONE),
    entry("enter_underline_mode", "underline", NONE),
    entry("erase_chars", "ech", params(1)),
    entry("exit_alt_charset_mode", "rmacs", NONE),
    entry("exit_am_mode", "rmam", NONE),
    entry("exit_attribute_mode", "sgr0", NONE),
    entry("exit_ca_mode", "rmcup", NONE),
    entry("exit_fullscreen", "rmcup", NONE),
    entry("exit_insert_mode", "rmir", NONE),
    entry("exit_standout_mode", "rmso", NONE),
    entry("exit_underline_mode", "rmul", NONE),
    entry("flash_hook", "hook", NONE),
    entry("flash_screen", "flash", NONE),
    entry("insert_line", "il1", NONE),
    entry("keypad_local", "rmkx", NONE),
    entry("keypad_xmit", "smkx", NONE),
    entry("meta_off", "rmm", NONE),
    entry("meta_on", "smm", NONE),
    entry("orig_pair", "op", NONE),
    entry("parm_down_cursor", "cud", params(1)),
    entry("parm_left_cursor", "cub", params(1)),
    entry("parm_dch", "dch", params(1)),
    entry("parm_delete_line", "dl", params(1)),
    entry("parm_ich", "ich", params(1)),
    entry("parm_index", "indn", params(1)),
    entry("parm_insert_line", "il", params(1)),
    entry("parm_right_cursor", "cuf", params(1)),
    entry("parm_rindex", "rin", params(1)),
    entry("parm_up_cursor", "cuu", params(1)),
    entry("print_screen", "mc0", NONE),
    entry("prtr_off", "mc4", NONE),
    entry("prtr_on", "mc5", NONE),
    entry("reset_1string", "r1", NONE),
    entry("reset_2string", "r2", NONE),
    entry("reset_3string", "r3", NONE),
    entry("restore_cursor", "rc", NONE),
    entry("row_address", "vpa", params(1)),
    entry("save_cursor", "sc", NONE),
    entry("scroll_forward", "ind", NONE),
    entry("scroll_reverse", "rev", NONE),
    entry("set0_des_seq", "s0ds", NONE),
    entry("set1_des_seq", "s1ds", NONE),
    entry("set2_des_seq", "s2ds", NONE),
    entry("set3_des_seq", "s3ds", NONE),
    // Not the real meaning of `color`, but it often matches and is a better
    // match than set_a_attributes1 or set_a_foreground.
    entry(
        "color",
        "_foreground_color",
        params(1).match_any().numeric(1),
    ),
    // Most commonly matched inward attribute.
    entry(
        "set_a_attributes1",
        "sgr1",
        params(1).match_any().match_optional(),
    ),
    entry("set_a_attributes2", "sgr1", params(2).match_any()),
    entry("set_a_attributes3", "sgr1", params(3).match_any()),
    entry("set_a_attributes4", "sgr1", params(4).match_any()),
    entry("set_a_attributes5", "sgr1", params(5).match_any()),
    entry("set_a_attributes6", "sgr1", params(6).match_any()),
    entry("set_a_attributes7", "sgr1", params(7).match_any()),
    entry("set_a_attributes8", "sgr1", params(8).match_any()),
    entry("set_a_attributes9", "sgr1", params(9).match_any()),
    entry(
        "set_a_foreground",
        "color",
        params(1).match_any().numeric(1),
    ),
    entry(
        "set_a_background",
        "on_color",
        params(1).match_any().numeric(1),
    ),
    entry("set_tab", "hts", NONE),
    entry("tab", "ht", NONE),
];

pub const RAW_PATTERNS: &[RawDeclaration] = &[
    ("bell", "\x07", ""),
    ("carriage_return", "\r", ""),
    ("cursor_left", "\x08", ""),
    ("cursor_report", "\x1b", r"\[([0-9]+);([0-9]+)R"),
    ("cursor_right", "\x1b", r"\[C"),
    ("exit_attribute_mode", "\x1b", r"\[m"),
    ("parm_left_cursor", "\x1b", r"\[([0-9]+)D"),
    ("parm_right_cursor", "\x1b", r"\[([0-9]+)C"),
    ("scroll_forward", "\n", ""),
    ("set0_des_seq", "\x1b(B", ""),
    ("set_a_attributes1", "\x1b", r"\[([0-9]+)?m"),
    ("set_a_attributes2", "\x1b", r"\[([0-9]+);([0-9]+)m"),
    ("set_a_attributes3", "\x1b", r"\[([0-9]+);([0-9]+);([0-9]+)m"),
    ("set_a_attributes4", "\x1b", r"\[([0-9]+);([0-9]+);([0-9]+);([0-9]+)m"),
    ("tab", "\t", ""),
];

pub const ADDITIVES: &[AdditiveDeclaration] = &[
    ("color256", "color", "\x1b", r"\[38;5;([0-9]+)m"),
    ("shift_in", "", "\x0f", ""),
    ("shift_out", "", "\x0e", ""),
    // xterm's sgr0 includes set0_des_seq, this matches the bare reset on its own.
    ("sgr0", "sgr0", "\x1b", r"\[m"),
    ("backspace", "", "\x08", ""),
    ("ascii_tab", "", "\t", ""),
];

/// Capabilities that move the cursor
pub const CAUSE_MOVEMENT: &[&str] = &[
    "ascii_tab",
    "backspace",
    "carriage_return",
    "clear_screen",
    "column_address",
    "cursor_address",
    "cursor_down",
    "cursor_home",
    "cursor_left",
    "cursor_right",
    "cursor_up",
    "enter_fullscreen",
    "exit_fullscreen",
    "parm_down_cursor",
    "parm_left_cursor",
    "parm_right_cursor",
    "parm_up_cursor",
    "restore_cursor",
    "row_address",
    "scroll_forward",
    "tab",
];

/// Historical movement list where `backspace` and `carriage_return` were
/// fused into a single name
pub const CAUSE_MOVEMENT_LEGACY: &[&str] = &[
    "ascii_tab",
    "backspacecarriage_return",
    "clear_screen",
    "column_address",
    "cursor_address",
    "cursor_down",
    "cursor_home",
    "cursor_left",
    "cursor_right",
    "cursor_up",
    "enter_fullscreen",
    "exit_fullscreen",
    "parm_down_cursor",
    "parm_left_cursor",
    "parm_right_cursor",
    "parm_up_cursor",
    "restore_cursor",
    "row_address",
    "scroll_forward",
    "tab",
];
