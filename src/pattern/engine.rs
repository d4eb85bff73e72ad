// Tue Oct 13 2026 - Alex

//! Thin boundary over the `regex` crates. Nothing outside `pattern::adapter`
//! touches the types in this module.

use crate::config::EngineConfig;
use crate::pattern::Flags;
use regex::{Regex, RegexBuilder};
use regex_automata::{meta, Anchored, Input};
use regex_syntax::hir::{Hir, Look};
use regex_syntax::ParserBuilder;

pub(crate) type Span = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EngineError {
    Syntax(String),
    Limit(String),
}

/// Compiled form owned by exactly one `Pattern`.
#[derive(Debug)]
pub(crate) struct EngineHandle {
    regex: Regex,
}

impl EngineHandle {
    pub(crate) fn capture_names(&self) -> Vec<Option<String>> {
        self.regex
            .capture_names()
            .map(|name| name.map(str::to_string))
            .collect()
    }
}

/// Companion that only matches when it reaches the end of the text. Built
/// from the parsed pattern, so inline flags and comments in the source
/// cannot leak into the `\z` anchor.
#[derive(Debug)]
pub(crate) struct FullHandle {
    regex: meta::Regex,
}

/// Overall span plus one slot per group, group 0 included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EngineMatch {
    pub span: Span,
    pub groups: Vec<Option<Span>>,
}

pub(crate) fn compile(
    pattern: &str,
    flags: Flags,
    config: &EngineConfig,
) -> Result<EngineHandle, EngineError> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(flags.contains(Flags::IGNORECASE))
        .multi_line(flags.contains(Flags::MULTILINE))
        .dot_matches_new_line(flags.contains(Flags::DOTALL))
        .ignore_whitespace(flags.contains(Flags::VERBOSE))
        .unicode(config.unicode)
        .crlf(config.crlf)
        .size_limit(config.size_limit)
        .dfa_size_limit(config.dfa_size_limit)
        .nest_limit(config.nest_limit)
        .build()
        .map_err(|e| match e {
            regex::Error::Syntax(reason) => EngineError::Syntax(reason),
            regex::Error::CompiledTooBig(limit) => EngineError::Limit(format!(
                "compiled program exceeds size limit of {} bytes",
                limit
            )),
            other => EngineError::Limit(other.to_string()),
        })?;

    Ok(EngineHandle { regex })
}

/// Leftmost-first search starting at `start`. Look-behind style assertions
/// (`^`, `\b`) still see the text before `start`.
pub(crate) fn search(
    handle: &EngineHandle,
    text: &str,
    start: usize,
) -> Result<Option<EngineMatch>, EngineError> {
    let caps = match handle.regex.captures_at(text, start) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let whole = caps
        .get(0)
        .ok_or_else(|| EngineError::Limit("engine returned a match without group 0".to_string()))?;

    let groups = caps
        .iter()
        .map(|m| m.map(|m| (m.start(), m.end())))
        .collect();

    Ok(Some(EngineMatch {
        span: (whole.start(), whole.end()),
        groups,
    }))
}

pub(crate) fn compile_full(
    pattern: &str,
    flags: Flags,
    config: &EngineConfig,
) -> Result<FullHandle, EngineError> {
    let hir = ParserBuilder::new()
        .case_insensitive(flags.contains(Flags::IGNORECASE))
        .multi_line(flags.contains(Flags::MULTILINE))
        .dot_matches_new_line(flags.contains(Flags::DOTALL))
        .ignore_whitespace(flags.contains(Flags::VERBOSE))
        .unicode(config.unicode)
        .crlf(config.crlf)
        .nest_limit(config.nest_limit)
        .utf8(true)
        .build()
        .parse(pattern)
        .map_err(|e| EngineError::Syntax(e.to_string()))?;

    let anchored = Hir::concat(vec![hir, Hir::look(Look::End)]);

    let regex = meta::Builder::new()
        .configure(
            meta::Config::new()
                .nfa_size_limit(Some(config.size_limit))
                .hybrid_cache_capacity(config.dfa_size_limit),
        )
        .build_from_hir(&anchored)
        .map_err(|e| match e.size_limit() {
            Some(limit) => EngineError::Limit(format!(
                "compiled program exceeds size limit of {} bytes",
                limit
            )),
            None => EngineError::Limit(e.to_string()),
        })?;

    Ok(FullHandle { regex })
}

/// Search anchored at `start` with the end-anchored companion.
pub(crate) fn search_full(
    handle: &FullHandle,
    text: &str,
    start: usize,
) -> Result<Option<EngineMatch>, EngineError> {
    let input = Input::new(text).range(start..).anchored(Anchored::Yes);
    let mut caps = handle.regex.create_captures();
    handle.regex.search_captures(&input, &mut caps);

    let whole = match caps.get_match() {
        Some(m) => m,
        None => return Ok(None),
    };

    let groups = (0..caps.group_len())
        .map(|i| caps.get_group(i).map(|span| (span.start, span.end)))
        .collect();

    Ok(Some(EngineMatch {
        span: (whole.start(), whole.end()),
        groups,
    }))
}

pub(crate) fn escape(text: &str) -> String {
    regex::escape(text)
}
