//! The activation code value type.

use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

/// Number of digits in every code.
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes: ordered draws of 4 from 10 digits (10 * 9 * 8 * 7).
pub const CODE_SPACE: usize = 5040;

/// Four distinct decimal digits in draw order.
///
/// The invariant is enforced by every constructor, so holders never need to
/// re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Build a code from digit values (`0..=9`).
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut seen = [false; 10];
        for &digit in &digits {
            if digit > 9 {
                return Err(CodeError::NotADigit {
                    found: char::from(b'0'.saturating_add(digit)),
                });
            }
            if seen[usize::from(digit)] {
                return Err(CodeError::RepeatedDigit { digit });
            }
            seen[usize::from(digit)] = true;
        }
        Ok(Self(digits))
    }

    pub(crate) fn from_sampled(digits: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(Self::from_digits(digits).is_ok());
        Self(digits)
    }

    /// Parse a code from its printed form, e.g. `"4071"`.
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let count = text.chars().count();
        if count != CODE_LENGTH {
            return Err(CodeError::WrongLength {
                expected: CODE_LENGTH,
                actual: count,
            });
        }
        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let value = ch.to_digit(10).ok_or(CodeError::NotADigit { found: ch })?;
            *slot = value as u8;
        }
        Self::from_digits(digits)
    }

    /// Digit values in draw order.
    #[must_use]
    pub const fn digits(&self) -> [u8; CODE_LENGTH] {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
