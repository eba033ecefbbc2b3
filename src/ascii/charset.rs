//! Character set definitions for ASCII rendering.

use std::fmt;

use crate::error::ConvertError;

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Named character set presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Standard ASCII density ramp (10 levels)
    #[default]
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
}

impl CharSet {
    /// Get the character slice for this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look up a charset by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(CharSet::Standard),
            "blocks" => Some(CharSet::Blocks),
            "minimal" => Some(CharSet::Minimal),
            _ => None,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            chars: self.chars().to_vec(),
        }
    }
}

/// An ordered character ramp, darkest-representative first.
///
/// Always holds at least [`Palette::MIN_LEVELS`] characters, so every
/// brightness maps to a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    pub const MIN_LEVELS: usize = 2;

    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self, ConvertError> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.len() < Self::MIN_LEVELS {
            return Err(ConvertError::InvalidPalette { len: chars.len() });
        }
        Ok(Self { chars })
    }

    /// Build a palette from a string such as `" .:-=+*#%@"`.
    pub fn parse(ramp: &str) -> Result<Self, ConvertError> {
        Self::new(ramp.chars())
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of brightness levels (characters) in the ramp.
    pub fn levels(&self) -> usize {
        self.chars.len()
    }

    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    pub fn brightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Character at `index`, clamped to the last entry.
    pub fn get(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        CharSet::Standard.palette()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
