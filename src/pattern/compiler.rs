// Tue Oct 13 2026 - Alex

use crate::config::EngineConfig;
use crate::pattern::adapter::{self, Mode};
use crate::pattern::engine::{EngineHandle, FullHandle};
use crate::pattern::scanner::{self, Found, Matches};
use crate::pattern::{Flags, GroupKey, Match, PatternError};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

pub type GroupIndex = IndexMap<String, usize, ahash::RandomState>;

/// Group index to optional name, slot 0 being the whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    names: Vec<Option<String>>,
    index: GroupIndex,
}

impl GroupTable {
    pub(crate) fn new(names: Vec<Option<String>>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| name.as_ref().map(|n| (n.clone(), i)))
            .collect();
        Self { names, index }
    }

    /// Slot count, group 0 included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).and_then(|n| n.as_deref())
    }

    pub fn resolve(&self, key: &GroupKey) -> Result<usize, PatternError> {
        match key {
            GroupKey::Index(i) if *i < self.names.len() => Ok(*i),
            GroupKey::Name(name) => self
                .index
                .get(name)
                .copied()
                .ok_or_else(|| PatternError::GroupLookup(key.clone())),
            _ => Err(PatternError::GroupLookup(key.clone())),
        }
    }

    pub fn named(&self) -> impl Iterator<Item = (&str, usize)> {
        self.index.iter().map(|(name, i)| (name.as_str(), *i))
    }

    pub(crate) fn index(&self) -> &GroupIndex {
        &self.index
    }
}

/// Immutable compiled matcher. Pattern text, flags and limits are fixed for
/// its lifetime, so a single instance can be shared across threads.
pub struct Pattern {
    source: String,
    flags: Flags,
    config: EngineConfig,
    handle: EngineHandle,
    // end-anchored companion used by fullmatch, compiled on first use
    full: OnceCell<FullHandle>,
    table: Arc<GroupTable>,
}

impl Pattern {
    pub(crate) fn from_parts(
        source: &str,
        flags: Flags,
        config: EngineConfig,
        handle: EngineHandle,
        table: GroupTable,
    ) -> Self {
        Self {
            source: source.to_string(),
            flags,
            config,
            handle,
            full: OnceCell::new(),
            table: Arc::new(table),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of capturing groups, not counting group 0.
    pub fn groups(&self) -> usize {
        self.table.len().saturating_sub(1)
    }

    pub fn groupindex(&self) -> &GroupIndex {
        self.table.index()
    }

    pub fn group_names(&self) -> impl Iterator<Item = Option<&str>> {
        (0..self.table.len()).map(move |i| self.table.name(i))
    }

    pub fn group_table(&self) -> &GroupTable {
        &self.table
    }

    pub fn r#match<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, PatternError> {
        self.match_at(text, 0)
    }

    pub fn match_at<'t>(
        &self,
        text: &'t str,
        pos: usize,
    ) -> Result<Option<Match<'t>>, PatternError> {
        adapter::run(self, text, pos, Mode::Anchored)
    }

    pub fn search<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, PatternError> {
        self.search_at(text, 0)
    }

    pub fn search_at<'t>(
        &self,
        text: &'t str,
        pos: usize,
    ) -> Result<Option<Match<'t>>, PatternError> {
        adapter::run(self, text, pos, Mode::Search)
    }

    pub fn fullmatch<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, PatternError> {
        self.fullmatch_at(text, 0)
    }

    pub fn fullmatch_at<'t>(
        &self,
        text: &'t str,
        pos: usize,
    ) -> Result<Option<Match<'t>>, PatternError> {
        adapter::run(self, text, pos, Mode::Full)
    }

    pub fn finditer<'p, 't>(&'p self, text: &'t str) -> Matches<'p, 't> {
        Matches::new(self, text)
    }

    pub fn findall<'t>(&self, text: &'t str) -> Result<Vec<Found<'t>>, PatternError> {
        scanner::findall(self, text)
    }

    pub(crate) fn handle(&self) -> &EngineHandle {
        &self.handle
    }

    pub(crate) fn full_handle(
        &self,
        init: impl FnOnce() -> Result<FullHandle, PatternError>,
    ) -> Result<&FullHandle, PatternError> {
        self.full.get_or_try_init(init)
    }

    pub(crate) fn table(&self) -> &Arc<GroupTable> {
        &self.table
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .field("groups", &self.groups())
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.is_empty() {
            write!(f, "regexrs.compile({:?})", self.source)
        } else {
            write!(f, "regexrs.compile({:?}, \"{}\")", self.source, self.flags)
        }
    }
}

pub fn compile(pattern: &str, flags: Flags) -> Result<Pattern, PatternError> {
    compile_with(pattern, flags, &EngineConfig::default())
}

pub fn compile_with(
    pattern: &str,
    flags: Flags,
    config: &EngineConfig,
) -> Result<Pattern, PatternError> {
    config.validate()?;
    adapter::compile(pattern, flags, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_table_from_pattern() {
        let pattern = compile(r"(?P<user>\w+)@(\w+)\.(?P<tld>\w+)", Flags::empty()).unwrap();
        assert_eq!(pattern.groups(), 3);
        assert_eq!(
            pattern.group_names().collect::<Vec<_>>(),
            vec![None, Some("user"), None, Some("tld")]
        );
        assert_eq!(pattern.groupindex().get("tld"), Some(&3));
        assert_eq!(
            pattern.group_table().resolve(&GroupKey::from(4)),
            Err(PatternError::GroupLookup(GroupKey::Index(4)))
        );
    }

    #[test]
    fn test_pattern_keeps_source_and_flags() {
        let pattern = compile("hello rust", Flags::I).unwrap();
        assert_eq!(pattern.as_str(), "hello rust");
        assert_eq!(pattern.flags(), Flags::IGNORECASE);
        assert_eq!(pattern.to_string(), "regexrs.compile(\"hello rust\", \"i\")");
        assert_eq!(compile("a", Flags::empty()).unwrap().to_string(), "regexrs.compile(\"a\")");
    }

    #[test]
    fn test_syntax_error_carries_pattern() {
        match compile(r"(\w+", Flags::empty()) {
            Err(PatternError::Syntax { pattern, reason }) => {
                assert_eq!(pattern, r"(\w+");
                assert!(!reason.is_empty());
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_size_limit_is_engine_failure() {
        let config = EngineConfig::default().with_size_limit(64);
        let err = compile_with(r"\w{100}", Flags::empty(), &config).unwrap_err();
        assert!(matches!(err, PatternError::Engine { .. }));
    }

    #[test]
    fn test_invalid_config_rejected_before_compile() {
        let config = EngineConfig::default().with_nest_limit(0);
        assert!(matches!(compile_with("a", Flags::empty(), &config), Err(PatternError::Config(_))));
    }

    #[test]
    fn test_independent_compiles_behave_alike() {
        let a = compile(r"\d+", Flags::empty()).unwrap();
        let b = compile(r"\d+", Flags::empty()).unwrap();
        let text = "ab 123 c";
        let span_a = a.search(text).unwrap().unwrap().span();
        let span_b = b.search(text).unwrap().unwrap().span();
        assert_eq!(span_a, span_b);
    }

    #[test]
    fn test_shared_across_threads() {
        let pattern = compile(r"(\w+)@(\w+)", Flags::empty()).unwrap();
        let inputs = ["a@b", "x y@z", "none here"];
        let results: Vec<Option<(usize, usize)>> = std::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|text| {
                    let pattern = &pattern;
                    s.spawn(move || pattern.search(text).unwrap().map(|m| m.span()))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, vec![Some((0, 3)), Some((2, 5)), None]);
    }
}
