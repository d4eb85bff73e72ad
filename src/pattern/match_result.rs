// Tue Oct 13 2026 - Alex

use crate::pattern::compiler::GroupTable;
use crate::pattern::engine::Span;
use crate::pattern::PatternError;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Positional index or name of a capturing group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Index(usize),
    Name(String),
}

impl From<usize> for GroupKey {
    fn from(index: usize) -> Self {
        GroupKey::Index(index)
    }
}

impl From<&str> for GroupKey {
    fn from(name: &str) -> Self {
        GroupKey::Name(name.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(name: String) -> Self {
        GroupKey::Name(name)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Index(i) => write!(f, "{}", i),
            GroupKey::Name(n) => write!(f, "{:?}", n),
        }
    }
}

/// One successful match: overall span plus a slot per group.
///
/// Slot 0 is the whole match and always present. A `None` slot means the
/// group did not take part in the match, which is different from a group
/// that matched the empty string.
#[derive(Debug, Clone)]
pub struct Match<'t> {
    text: &'t str,
    pos: usize,
    groups: Vec<Option<Span>>,
    table: Arc<GroupTable>,
}

impl<'t> Match<'t> {
    pub(crate) fn new(
        text: &'t str,
        pos: usize,
        groups: Vec<Option<Span>>,
        table: Arc<GroupTable>,
    ) -> Self {
        debug_assert!(matches!(groups.first(), Some(Some(_))));
        debug_assert_eq!(groups.len(), table.len());
        Self {
            text,
            pos,
            groups,
            table,
        }
    }

    /// `(start, end)` as UTF-8 byte offsets into the haystack, end exclusive.
    pub fn span(&self) -> (usize, usize) {
        self.groups[0].unwrap_or((self.pos, self.pos))
    }

    pub fn start(&self) -> usize {
        self.span().0
    }

    pub fn end(&self) -> usize {
        self.span().1
    }

    pub fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    pub fn as_str(&self) -> &'t str {
        let (start, end) = self.span();
        &self.text[start..end]
    }

    /// Offset the search that produced this match started from.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Haystack the match was found in.
    pub fn string(&self) -> &'t str {
        self.text
    }

    /// Number of slots, group 0 included.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn group_span(
        &self,
        key: impl Into<GroupKey>,
    ) -> Result<Option<(usize, usize)>, PatternError> {
        let index = self.table.resolve(&key.into())?;
        Ok(self.groups[index])
    }

    pub fn group(&self, key: impl Into<GroupKey>) -> Result<Option<&'t str>, PatternError> {
        Ok(self.group_span(key)?.map(|(s, e)| &self.text[s..e]))
    }

    /// Groups 1.. in order.
    pub fn groups(&self) -> Vec<Option<&'t str>> {
        self.groups
            .iter()
            .skip(1)
            .map(|span| span.map(|(s, e)| &self.text[s..e]))
            .collect()
    }

    /// Named groups in the order they appear in the pattern.
    pub fn groupdict(&self) -> IndexMap<String, Option<&'t str>> {
        self.table
            .named()
            .map(|(name, index)| {
                let value = self.groups[index].map(|(s, e)| &self.text[s..e]);
                (name.to_string(), value)
            })
            .collect()
    }

    /// Highest-numbered group that took part in the match.
    pub fn lastindex(&self) -> Option<usize> {
        (1..self.groups.len()).rev().find(|&i| self.groups[i].is_some())
    }

    /// Name of the last named group that took part in the match.
    pub fn lastgroup(&self) -> Option<&str> {
        self.table
            .named()
            .filter(|(_, index)| self.groups[*index].is_some())
            .last()
            .map(|(name, _)| name)
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.span();
        write!(
            f,
            "<regexrs.Match object; span=({}, {}), match={:?}>",
            start,
            end,
            self.as_str()
        )
    }
}
