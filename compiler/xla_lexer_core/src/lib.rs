//! Low-level scanning primitives for XLA source text.
//!
//! Two pieces live here:
//!
//! - [`Cursor`]: a character cursor with char-offset positions, used by the
//!   collector in `xla_parse`.
//! - [`classify`] / [`classify_atom`]: the pure atom classifier that assigns
//!   an [`AtomPattern`] to a run of non-delimiter characters.
//!
//! Positions are counted in `char`s, not bytes, so that error offsets match
//! what an editor shows for non-ASCII source.

mod classify;
mod cursor;

pub use classify::{classify, classify_atom, AtomPattern};
pub use cursor::Cursor;

/// Characters that separate atoms.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Marker that starts a line comment.
pub const COMMENT_START: char = ';';

/// Marker that starts a tag atom (`:urgent`).
pub const TAG_PREFIX: char = ':';

/// Marker that starts a resource reference (`@profiles/general`).
pub const RESOURCE_PREFIX: char = '@';
