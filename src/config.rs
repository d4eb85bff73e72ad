// Tue Oct 13 2026 - Alex

use crate::pattern::PatternError;
use serde::{Deserialize, Serialize};

pub const SIZE_LIMIT_ENV: &str = "REGEXRS_SIZE_LIMIT";
pub const DFA_SIZE_LIMIT_ENV: &str = "REGEXRS_DFA_SIZE_LIMIT";
pub const NEST_LIMIT_ENV: &str = "REGEXRS_NEST_LIMIT";

/// Resource limits and engine-level switches applied at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub size_limit: usize,
    pub dfa_size_limit: usize,
    pub nest_limit: u32,
    pub unicode: bool,
    pub crlf: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 2 * (1 << 20),
            nest_limit: 250,
            unicode: true,
            crlf: false,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn with_dfa_size_limit(mut self, limit: usize) -> Self {
        self.dfa_size_limit = limit;
        self
    }

    pub fn with_nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }

    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    pub fn with_crlf(mut self, crlf: bool) -> Self {
        self.crlf = crlf;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, PatternError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PatternError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with any `REGEXRS_*` limit variables that are set.
    pub fn from_env() -> Result<Self, PatternError> {
        let mut config = Self::default();
        if let Some(v) = read_env(SIZE_LIMIT_ENV)? {
            config.size_limit = v;
        }
        if let Some(v) = read_env(DFA_SIZE_LIMIT_ENV)? {
            config.dfa_size_limit = v;
        }
        if let Some(v) = read_env(NEST_LIMIT_ENV)? {
            config.nest_limit = u32::try_from(v)
                .map_err(|_| PatternError::Config(format!("{} too large: {}", NEST_LIMIT_ENV, v)))?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        if self.size_limit == 0 {
            return Err(PatternError::Config("size_limit must be greater than 0".to_string()));
        }
        if self.dfa_size_limit == 0 {
            return Err(PatternError::Config("dfa_size_limit must be greater than 0".to_string()));
        }
        if self.nest_limit == 0 {
            return Err(PatternError::Config("nest_limit must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn read_env(key: &str) -> Result<Option<usize>, PatternError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| PatternError::Config(format!("{} is not a number: {:?}", key, raw))),
        Err(_) => Ok(None),
    }
}
