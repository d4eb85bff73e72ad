// Tue Oct 13 2026 - Alex

use crate::pattern::adapter::{self, Mode};
use crate::pattern::compiler::Pattern;
use crate::pattern::{Match, PatternError};
use log::trace;

/// One `findall` item. Patterns without capturing groups yield the matched
/// text; patterns with groups yield the full capture set.
#[derive(Debug, Clone)]
pub enum Found<'t> {
    Text(&'t str),
    Captures(Match<'t>),
}

impl<'t> Found<'t> {
    /// Whole-match text in either case.
    pub fn as_str(&self) -> &'t str {
        match self {
            Found::Text(s) => s,
            Found::Captures(m) => m.as_str(),
        }
    }

    pub fn captures(&self) -> Option<&Match<'t>> {
        match self {
            Found::Text(_) => None,
            Found::Captures(m) => Some(m),
        }
    }
}

/// Non-overlapping left-to-right scan. A zero-width match moves the
/// cursor one character past its end so the scan always terminates.
pub struct Matches<'p, 't> {
    pattern: &'p Pattern,
    text: &'t str,
    pos: usize,
    done: bool,
}

impl<'p, 't> Matches<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, text: &'t str) -> Self {
        Self {
            pattern,
            text,
            pos: 0,
            done: false,
        }
    }

    fn next_pos(&self, m: &Match<'t>) -> Option<usize> {
        let end = m.end();
        if !m.is_empty() {
            return Some(end);
        }
        self.text[end..].chars().next().map(|c| end + c.len_utf8())
    }
}

impl<'p, 't> Iterator for Matches<'p, 't> {
    type Item = Result<Match<'t>, PatternError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match adapter::run(self.pattern, self.text, self.pos, Mode::Search) {
            Ok(Some(m)) => {
                match self.next_pos(&m) {
                    Some(pos) => self.pos = pos,
                    None => self.done = true,
                }
                trace!("scan hit {:?}, resuming at {}", m.span(), self.pos);
                Some(Ok(m))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Matches<'_, '_> {}

pub(crate) fn findall<'t>(
    pattern: &Pattern,
    text: &'t str,
) -> Result<Vec<Found<'t>>, PatternError> {
    let with_groups = pattern.groups() > 0;
    pattern
        .finditer(text)
        .map(|m| {
            m.map(|m| {
                if with_groups {
                    Found::Captures(m)
                } else {
                    Found::Text(m.as_str())
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{compile, Flags};

    fn texts(found: &[Found<'_>]) -> Vec<String> {
        found.iter().map(|f| f.as_str().to_string()).collect()
    }

    #[test]
    fn test_findall_words_in_order() {
        let pattern = compile(r"\w+", Flags::empty()).unwrap();
        let found = pattern.findall("hello rust").unwrap();
        assert!(found.iter().all(|f| matches!(f, Found::Text(_))));
        assert_eq!(texts(&found), vec!["hello", "rust"]);
    }

    #[test]
    fn test_zero_width_matches_terminate() {
        let pattern = compile(r"a*", Flags::empty()).unwrap();
        let found = pattern.findall("baaa").unwrap();
        assert_eq!(texts(&found), vec!["", "aaa", ""]);

        let empty = compile("", Flags::empty()).unwrap();
        assert_eq!(empty.findall("héllo").unwrap().len(), 6);
        assert_eq!(empty.findall("").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_match_after_word() {
        let pattern = compile(r"\w*", Flags::empty()).unwrap();
        let found = pattern.findall("ab cd").unwrap();
        assert_eq!(texts(&found), vec!["ab", "", "cd", ""]);
    }

    #[test]
    fn test_findall_with_groups_yields_captures() {
        let pattern = compile(r"(\w+)=(\d+)?", Flags::empty()).unwrap();
        let found = pattern.findall("a=1 b= c=3").unwrap();
        assert_eq!(found.len(), 3);
        let second = found[1].captures().unwrap();
        assert_eq!(second.groups(), vec![Some("b"), None]);
        assert_eq!(found[2].captures().unwrap().span(), (7, 10));
    }

    #[test]
    fn test_no_match_is_empty() {
        let pattern = compile(r"\d+", Flags::empty()).unwrap();
        assert!(pattern.findall("no digits").unwrap().is_empty());
        assert!(pattern.finditer("no digits").next().is_none());
    }

    #[test]
    fn test_finditer_starts_are_increasing() {
        let pattern = compile(r"\b", Flags::empty()).unwrap();
        let starts: Vec<usize> = pattern
            .finditer("ab cd")
            .map(|m| m.unwrap().start())
            .collect();
        assert_eq!(starts, vec![0, 2, 3, 5]);
    }
}
