// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 input sequence constants.
//!
//! # Input Sequence Format
//!
//! - `CSI` = ESC [  (0x1B 0x5B)
//! - `SS3` = ESC O  (0x1B 0x4F)
//! - Function keys: `CSI n ~`, `CSI n ; m ~`, `CSI letter`, `CSI 1 ; m letter`
//! - rxvt variants end in `$` (shift) or `^` (ctrl) instead of `~`
//! - Cygwin / libuv use a doubled bracket: `ESC [ [ A` for F1
//!
//! # Modifier parameter
//!
//! The parameter `m` is `1 + bits`, where the bits are:
//! - 1 = Shift
//! - 2 = Alt (reported as meta)
//! - 4 = Ctrl
//! - 8 = Meta

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// ==================== Sequence Components ====================

/// ESC character (27 in decimal, 0x1B in hex).
pub const ESC: char = '\x1b';

/// CSI introducer after ESC: `[`.
pub const CSI_BRACKET: char = '[';

/// Doubled CSI introducer used by Cygwin and libuv: `[[`.
pub const CSI_DOUBLE_BRACKET: &str = "[[";

/// SS3 introducer after ESC: `O`.
pub const SS3_O: char = 'O';

/// SS2 style introducer after ESC: `N`. Rarely sent, but accepted.
pub const SS2_N: char = 'N';

/// Parameter separator: `;`.
pub const PARAM_SEPARATOR: char = ';';

/// Prefix that some terminals put before the modifier of letter terminated sequences,
/// eg: `ESC [ 1 ; 5 A`.
pub const LETTER_MODIFIER_PREFIX: &str = "1;";

/// Terminators of numeric sequences: `~` (xterm), `^` (rxvt ctrl), `$` (rxvt shift).
pub const NUMERIC_TERMINATORS: [char; 3] = ['~', '^', '$'];

// ==================== Control Characters ====================

/// Backspace (Ctrl+H).
pub const BACKSPACE: char = '\x08';

/// Delete, sent by most terminals for the backspace key.
pub const DELETE: char = '\x7f';

/// Upper bound of the C0 range that maps back to Ctrl+letter chords (Ctrl+Z).
pub const CTRL_LETTER_MAX: char = '\x1a';

/// Offset from a C0 control code to its lowercase letter: `0x01 + 0x60 = 'a'`.
pub const CTRL_TO_LOWERCASE_OFFSET: u32 = 0x60;

// ==================== High Bit Meta ====================

/// Some terminals send Meta+key as the key's byte with the high bit set.
pub const HIGH_BIT: u8 = 0x80;
