// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small stack allocated containers. Most chunks decode into one key whose name is a
//! single character, so both of these rarely spill onto the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Enough for any ASCII name and most emoji ZWJ sequences.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for literal key names (one grapheme cluster). When
/// this gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
