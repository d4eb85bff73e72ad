// Tue Oct 13 2026 - Alex

use crate::pattern::PatternError;
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Compile-time matching options.
    ///
    /// Bit values follow the `re` module numbering so raw integers coming
    /// from other tooling can be passed through `Flags::from_bits`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        const IGNORECASE = 2;
        const MULTILINE = 8;
        const DOTALL = 16;
        const VERBOSE = 64;
    }
}

impl Flags {
    pub const NOFLAG: Flags = Flags::empty();
    pub const I: Flags = Flags::IGNORECASE;
    pub const M: Flags = Flags::MULTILINE;
    pub const S: Flags = Flags::DOTALL;
    pub const X: Flags = Flags::VERBOSE;

    const LETTERS: [(char, Flags); 4] = [
        ('i', Flags::IGNORECASE),
        ('m', Flags::MULTILINE),
        ('s', Flags::DOTALL),
        ('x', Flags::VERBOSE),
    ];

    pub fn from_raw(bits: u32) -> Result<Self, PatternError> {
        Flags::from_bits(bits).ok_or(PatternError::UnknownFlags(bits))
    }

    pub fn letter(c: char) -> Option<Flags> {
        Self::LETTERS
            .iter()
            .find(|(l, _)| *l == c.to_ascii_lowercase())
            .map(|(_, f)| *f)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, flag) in Self::LETTERS.iter() {
            if self.contains(*flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != ',')
            .try_fold(Flags::empty(), |acc, c| {
                Flags::letter(c)
                    .map(|f| acc | f)
                    .ok_or_else(|| PatternError::InvalidFlag(c))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_is_order_independent() {
        assert_eq!(Flags::I | Flags::M, Flags::M | Flags::I);
        assert_eq!(Flags::I | Flags::I, Flags::I);
        assert!((Flags::I | Flags::S).contains(Flags::DOTALL));
        assert!(!Flags::NOFLAG.contains(Flags::I));
    }

    #[test]
    fn test_raw_bits() {
        assert_eq!(Flags::from_raw(2).unwrap(), Flags::IGNORECASE);
        assert_eq!(Flags::from_raw(2 | 16).unwrap(), Flags::I | Flags::S);
        assert!(matches!(Flags::from_raw(4), Err(PatternError::UnknownFlags(4))));
    }

    #[test]
    fn test_letters() {
        let flags: Flags = "si".parse().unwrap();
        assert_eq!(flags, Flags::I | Flags::S);
        assert_eq!(flags.to_string(), "is");
        assert_eq!("".parse::<Flags>().unwrap(), Flags::empty());
        assert!(matches!("iq".parse::<Flags>(), Err(PatternError::InvalidFlag('q'))));
    }
}
