// Tue Oct 13 2026 - Alex

pub mod error;
pub mod flags;
pub mod compiler;
pub mod match_result;
pub mod scanner;
pub mod api;
pub mod presets;
mod adapter;
mod engine;

pub use error::PatternError;
pub use flags::Flags;
pub use compiler::{compile, compile_with, GroupIndex, GroupTable, Pattern};
pub use match_result::{GroupKey, Match};
pub use scanner::{Found, Matches};
pub use api::{escape, findall, fullmatch, r#match, search, PatternArg};
