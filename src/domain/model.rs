use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_positive_number, Validate};
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MIN_PASSWORD_COUNT: usize = 1;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Prompt order, which is also pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase letters",
            CharClass::Uppercase => "uppercase letters",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Characters eligible for sampling. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharPool {
    chars: Vec<u8>,
}

impl CharPool {
    /// Concatenates the alphabets of `classes` in the order given.
    /// Returns `None` when nothing is selected.
    pub fn from_classes(classes: &[CharClass]) -> Option<Self> {
        let chars: Vec<u8> = classes
            .iter()
            .flat_map(|class| class.alphabet().iter().copied())
            .collect();

        if chars.is_empty() {
            None
        } else {
            Some(Self { chars })
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub length: usize,
    pub count: usize,
    pub pool: CharPool,
}

impl GenerationRequest {
    pub fn new(length: usize, count: usize, pool: CharPool) -> Result<Self> {
        let request = Self { length, count, pool };
        request.validate()?;
        Ok(request)
    }
}

impl Validate for GenerationRequest {
    fn validate(&self) -> Result<()> {
        validate_positive_number("length", self.length, MIN_PASSWORD_LENGTH)?;
        validate_positive_number("count", self.count, MIN_PASSWORD_COUNT)?;
        validate_non_empty("pool", self.pool.as_bytes())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(Vec<String>),
    NoPool,
}
