use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Answer label for an option slot (`A` through `Z`).
///
/// Labels are generated from the option's position in the list: index 0
/// is `A`, index 1 is `B`, and so on. Only the first 26 option slots can
/// carry a label.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Highest number of options that can be labelled.
    pub const MAX_OPTIONS: usize = 26;

    /// Label for the option at `index`, or `None` past the label range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| usize::from(i) < Self::MAX_OPTIONS)
            .map(Self)
    }

    /// Zero-based option index this label points at.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn as_char(self) -> char {
        let i = self.index();
        LABELS[i..=i].chars().next().unwrap_or('A')
    }

    /// Uppercase ASCII label as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        let i = self.index();
        &LABELS[i..=i]
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected a single letter A-Z, got {raw:?}")]
pub struct LetterParseError {
    raw: String,
}

impl FromStr for Letter {
    type Err = LetterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => Ok(Self(c as u8 - b'A')),
            _ => Err(LetterParseError { raw: s.to_string() }),
        }
    }
}
