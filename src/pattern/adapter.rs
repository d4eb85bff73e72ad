// Tue Oct 13 2026 - Alex

use crate::config::EngineConfig;
use crate::pattern::compiler::{GroupTable, Pattern};
use crate::pattern::engine::{self, EngineError, FullHandle};
use crate::pattern::{Flags, Match, PatternError};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Match must begin exactly at the start offset.
    Anchored,
    /// Leftmost match beginning at or after the start offset.
    Search,
    /// Anchored, and the match must also reach the end of the text.
    Full,
}

fn translate(pattern: &str, err: EngineError) -> PatternError {
    match err {
        EngineError::Syntax(reason) => PatternError::Syntax {
            pattern: pattern.to_string(),
            reason,
        },
        EngineError::Limit(reason) => PatternError::Engine {
            pattern: pattern.to_string(),
            reason,
        },
    }
}

pub(crate) fn compile(
    source: &str,
    flags: Flags,
    config: &EngineConfig,
) -> Result<Pattern, PatternError> {
    let handle = engine::compile(source, flags, config).map_err(|e| translate(source, e))?;
    let table = GroupTable::new(handle.capture_names());
    debug!(
        "compiled pattern {:?} flags={:?} groups={}",
        source,
        flags,
        table.len() - 1
    );
    Ok(Pattern::from_parts(source, flags, config.clone(), handle, table))
}

fn full_handle(pattern: &Pattern) -> Result<&FullHandle, PatternError> {
    pattern.full_handle(|| {
        let source = pattern.as_str();
        // the source already compiled, so anything here is an engine problem
        engine::compile_full(source, pattern.flags(), pattern.config()).map_err(|e| match e {
            EngineError::Syntax(reason) | EngineError::Limit(reason) => PatternError::Engine {
                pattern: source.to_string(),
                reason,
            },
        })
    })
}

pub(crate) fn check_offset(text: &str, offset: usize) -> Result<(), PatternError> {
    if offset > text.len() || !text.is_char_boundary(offset) {
        return Err(PatternError::Range {
            offset,
            len: text.len(),
        });
    }
    Ok(())
}

pub(crate) fn run<'t>(
    pattern: &Pattern,
    text: &'t str,
    start: usize,
    mode: Mode,
) -> Result<Option<Match<'t>>, PatternError> {
    check_offset(text, start)?;

    let found = match mode {
        Mode::Full => engine::search_full(full_handle(pattern)?, text, start),
        Mode::Anchored | Mode::Search => engine::search(pattern.handle(), text, start),
    }
    .map_err(|e| translate(pattern.as_str(), e))?;
    trace!(
        "{:?} {:?} at {} -> {:?}",
        mode,
        pattern.as_str(),
        start,
        found.as_ref().map(|m| m.span)
    );

    let found = match found {
        Some(m) => m,
        None => return Ok(None),
    };

    if mode != Mode::Search && found.span.0 != start {
        return Ok(None);
    }

    Ok(Some(Match::new(text, start, found.groups, pattern.table().clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile;

    #[test]
    fn test_offsets_are_absolute() {
        let pattern = compile(r"\d+", Flags::empty()).unwrap();
        let m = run(&pattern, "ab 12 34", 4, Mode::Search).unwrap().unwrap();
        assert_eq!(m.span(), (4, 5));
        assert_eq!(m.pos(), 4);
    }

    #[test]
    fn test_anchored_rejects_later_match() {
        let pattern = compile(r"\d+", Flags::empty()).unwrap();
        assert!(run(&pattern, "ab 12", 0, Mode::Anchored).unwrap().is_none());
        assert!(run(&pattern, "ab 12", 3, Mode::Anchored).unwrap().is_some());
    }

    #[test]
    fn test_range_errors() {
        let pattern = compile("a", Flags::empty()).unwrap();
        assert_eq!(
            run(&pattern, "abc", 4, Mode::Search).unwrap_err(),
            PatternError::Range { offset: 4, len: 3 }
        );
        assert!(run(&pattern, "abc", 3, Mode::Search).unwrap().is_none());
        // inside the two-byte 'é'
        assert!(matches!(run(&pattern, "éa", 1, Mode::Search), Err(PatternError::Range { .. })));
    }

    #[test]
    fn test_full_prefers_complete_alternative() {
        let pattern = compile("a|ab", Flags::empty()).unwrap();
        assert_eq!(run(&pattern, "ab", 0, Mode::Anchored).unwrap().unwrap().as_str(), "a");
        assert_eq!(run(&pattern, "ab", 0, Mode::Full).unwrap().unwrap().as_str(), "ab");
        assert!(run(&pattern, "abc", 0, Mode::Full).unwrap().is_none());
    }

    #[test]
    fn test_full_with_verbose_trailing_comment() {
        let pattern = compile("a b  # letters", Flags::VERBOSE).unwrap();
        assert!(run(&pattern, "ab", 0, Mode::Full).unwrap().is_some());
        assert_eq!(pattern.groups(), 0);
    }

    #[test]
    fn test_full_with_inline_verbose_flags() {
        let trailing = compile("(?x)a # trailing", Flags::empty()).unwrap();
        assert_eq!(run(&trailing, "a", 0, Mode::Full).unwrap().unwrap().span(), (0, 1));

        let toggled = compile("a(?-x)", Flags::VERBOSE).unwrap();
        assert_eq!(run(&toggled, "a", 0, Mode::Full).unwrap().unwrap().span(), (0, 1));
        assert!(run(&toggled, "ab", 0, Mode::Full).unwrap().is_none());
    }
}
