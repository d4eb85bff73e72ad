// Tue Oct 13 2026 - Alex

//! Compile regular expressions once, then run anchored matches, searches
//! and non-overlapping scans against text, with a capture model that keeps
//! "group did not participate" separate from "group matched nothing".

pub mod config;
pub mod pattern;

pub use config::EngineConfig;
pub use pattern::{
    compile, compile_with, escape, findall, fullmatch, r#match, search, Flags, Found, GroupKey,
    Match, Pattern, PatternArg, PatternError,
};

pub type Result<T> = std::result::Result<T, PatternError>;
