// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Library errors.

use thiserror::Error;

/// Everything that can go wrong while turning a number into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericsError {
  /// The input is not a number we know how to read (NaN, infinity, non-numeric text).
  #[error("type {0} is not a supported number type")]
  UnsupportedType(String),

  /// The absolute value is at or beyond the language's upper bound.
  #[error("absolute value of {value} must be less than {max}")]
  Range {
    /// The offending input, as written.
    value: String,
    /// The exclusive bound it ran into.
    max: u64,
  },

  /// An ordinal was requested for a value with a fractional part.
  #[error("cannot treat float {0} as ordinal")]
  OrdinalType(String),

  /// An ordinal was requested for a negative value.
  #[error("cannot treat negative number {0} as ordinal")]
  OrdinalRange(String),

  /// The currency code has no forms registered for the language.
  #[error("currency {0:?} forms are not implemented for this language")]
  UnsupportedCurrency(String),

  /// The vocabulary lacks the unit, tens, or multiplier words needed to split the value.
  /// This is a defect in the language tables, not in the caller's input.
  #[error("cannot split {0}: no multiplier or tens word at or below it")]
  Structural(u64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumericsError>;

impl NumericsError {
  /// Build a range error for `value` against the exclusive bound `max`.
  pub fn range(value: impl ToString, max: u64) -> Self {
    NumericsError::Range {
      value: value.to_string(),
      max,
    }
  }
}
