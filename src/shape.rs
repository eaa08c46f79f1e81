use crate::consts::MAX_REPEAT;
use serde::Serialize;
use std::fmt;

/// Character class a field value is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "chars")]
pub enum CharClass {
    /// ASCII `0-9`.
    Digit,
    /// ASCII `a-zA-Z`.
    Alpha,
    /// ASCII `0-9a-zA-Z`.
    Alnum,
    /// Any of the listed literal characters.
    Set(String),
}

impl CharClass {
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::Alnum => c.is_ascii_alphanumeric(),
            CharClass::Set(chars) => chars.contains(c),
        }
    }

    fn pattern(&self) -> String {
        match self {
            CharClass::Digit => "[0-9]".to_string(),
            CharClass::Alpha => "[a-zA-Z]".to_string(),
            CharClass::Alnum => "[0-9a-zA-Z]".to_string(),
            CharClass::Set(chars) => {
                let escaped: String = chars
                    .chars()
                    .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                    .collect();
                format!("[{escaped}]")
            }
        }
    }
}

/// How many characters of the class a field value spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Repeat {
    fn pattern(&self) -> String {
        match *self {
            Repeat::Exactly(n) => format!("{{{n}}}"),
            Repeat::AtLeast(1) => "+".to_string(),
            Repeat::AtLeast(n) => format!("{{{n},}}"),
            Repeat::Between(min, max) => format!("{{{min},{max}}}"),
        }
    }
}

/// The shape rule of a field: a character class plus a repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub class: CharClass,
    pub repeat: Repeat,
}

impl Shape {
    pub fn new(class: CharClass, repeat: Repeat) -> Self {
        Self { class, repeat }
    }

    /// Exactly `n` ASCII digits.
    pub fn digits(n: usize) -> Self {
        Self::new(CharClass::Digit, Repeat::Exactly(n))
    }

    /// One or more ASCII letters.
    pub fn letters() -> Self {
        Self::new(CharClass::Alpha, Repeat::AtLeast(1))
    }

    /// Exactly `n` ASCII letters.
    pub fn letters_exactly(n: usize) -> Self {
        Self::new(CharClass::Alpha, Repeat::Exactly(n))
    }

    /// One or more ASCII letters or digits.
    pub fn alphanumeric() -> Self {
        Self::new(CharClass::Alnum, Repeat::AtLeast(1))
    }

    pub fn is_fixed_length(&self) -> bool {
        matches!(self.repeat, Repeat::Exactly(_))
            || matches!(self.repeat, Repeat::Between(min, max) if min == max)
    }

    /// Check the shape can match a non-empty value. Returns the reason on failure.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if let CharClass::Set(chars) = &self.class
            && chars.is_empty()
        {
            return Err("character set is empty".to_string());
        }
        match self.repeat {
            Repeat::Exactly(0) | Repeat::AtLeast(0) | Repeat::Between(0, _) => {
                Err("minimum length must be at least 1".to_string())
            }
            Repeat::Between(min, max) if min > max => {
                Err(format!("minimum {min} exceeds maximum {max}"))
            }
            Repeat::Exactly(n) | Repeat::AtLeast(n) | Repeat::Between(_, n) if n > MAX_REPEAT => {
                Err(format!("length {n} exceeds limit of {MAX_REPEAT}"))
            }
            _ => Ok(()),
        }
    }

    /// Rule text for this shape, without a capture group.
    pub(crate) fn pattern(&self) -> String {
        format!("{}{}", self.class.pattern(), self.repeat.pattern())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match &self.class {
            CharClass::Digit => "digit".to_string(),
            CharClass::Alpha => "letter".to_string(),
            CharClass::Alnum => "alphanumeric".to_string(),
            CharClass::Set(chars) => format!("one of {chars:?}"),
        };
        match self.repeat {
            Repeat::Exactly(n) => write!(f, "{n} x {class}"),
            Repeat::AtLeast(n) => write!(f, "{n}+ x {class}"),
            Repeat::Between(min, max) => write!(f, "{min}..={max} x {class}"),
        }
    }
}
