// Tue Oct 13 2026 - Alex

use crate::pattern::compiler::{compile, Pattern};
use crate::pattern::engine;
use crate::pattern::scanner::Found;
use crate::pattern::{Flags, Match, PatternError};
use std::ops::Deref;

/// Pattern argument accepted by the free functions: either text that still
/// needs compiling or an existing compiled pattern.
#[derive(Debug, Clone, Copy)]
pub enum PatternArg<'p> {
    Raw(&'p str),
    Compiled(&'p Pattern),
}

impl<'p> From<&'p str> for PatternArg<'p> {
    fn from(text: &'p str) -> Self {
        PatternArg::Raw(text)
    }
}

impl<'p> From<&'p String> for PatternArg<'p> {
    fn from(text: &'p String) -> Self {
        PatternArg::Raw(text.as_str())
    }
}

impl<'p> From<&'p Pattern> for PatternArg<'p> {
    fn from(pattern: &'p Pattern) -> Self {
        PatternArg::Compiled(pattern)
    }
}

enum Resolved<'p> {
    Borrowed(&'p Pattern),
    Owned(Pattern),
}

impl Deref for Resolved<'_> {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        match self {
            Resolved::Borrowed(p) => p,
            Resolved::Owned(p) => p,
        }
    }
}

impl<'p> PatternArg<'p> {
    fn resolve(self, flags: Flags) -> Result<Resolved<'p>, PatternError> {
        match self {
            PatternArg::Raw(text) => Ok(Resolved::Owned(compile(text, flags)?)),
            PatternArg::Compiled(_) if !flags.is_empty() => {
                Err(PatternError::FlagConflict { flags })
            }
            PatternArg::Compiled(pattern) => Ok(Resolved::Borrowed(pattern)),
        }
    }
}

/// Match anchored at `pos`.
pub fn r#match<'p, 't>(
    pattern: impl Into<PatternArg<'p>>,
    text: &'t str,
    pos: usize,
    flags: Flags,
) -> Result<Option<Match<'t>>, PatternError> {
    pattern.into().resolve(flags)?.match_at(text, pos)
}

/// Leftmost match starting anywhere at or after `pos`.
pub fn search<'p, 't>(
    pattern: impl Into<PatternArg<'p>>,
    text: &'t str,
    pos: usize,
    flags: Flags,
) -> Result<Option<Match<'t>>, PatternError> {
    pattern.into().resolve(flags)?.search_at(text, pos)
}

/// Match anchored at `pos` that also runs to the end of `text`.
pub fn fullmatch<'p, 't>(
    pattern: impl Into<PatternArg<'p>>,
    text: &'t str,
    pos: usize,
    flags: Flags,
) -> Result<Option<Match<'t>>, PatternError> {
    pattern.into().resolve(flags)?.fullmatch_at(text, pos)
}

pub fn findall<'p, 't>(
    pattern: impl Into<PatternArg<'p>>,
    text: &'t str,
    flags: Flags,
) -> Result<Vec<Found<'t>>, PatternError> {
    pattern.into().resolve(flags)?.findall(text)
}

pub fn escape(text: &str) -> String {
    engine::escape(text)
}
