// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Calendar years: "nineteen ninety", "forty-four BC".

use tracing::instrument;

use crate::error::{NumericsError, Result};
use crate::language::Language;
use crate::number::Number;
use crate::Numerics;

/// How a year is read out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOptions {
  /// Era written after the year. Negative years default to the language's "BC".
  pub suffix: Option<String>,
  /// Read in digit pairs ("nineteen ninety") rather than as a plain cardinal.
  pub long_form: bool,
}

impl Default for YearOptions {
  fn default() -> Self {
    YearOptions {
      suffix: None,
      long_form: true,
    }
  }
}

impl<L: Language> Numerics<L> {
  /// Read a year the way it is spoken.
  /// ```rust
  /// use numwords::Numerics;
  /// let converter = Numerics::default();
  ///
  /// assert_eq!(converter.to_year(1066).unwrap(), "ten sixty-six");
  /// assert_eq!(converter.to_year(-44).unwrap(), "forty-four BC");
  /// ```
  pub fn to_year(&self, value: impl Into<Number>) -> Result<String> {
    self.to_year_with(value, &YearOptions::default())
  }

  /// Read a year with explicit options. Any fraction is dropped.
  pub fn to_year_with(&self, value: impl Into<Number>, options: &YearOptions) -> Result<String> {
    self.year(&value.into(), options)
  }

  #[instrument(level = "trace", skip(self))]
  fn year(&self, number: &Number, options: &YearOptions) -> Result<String> {
    let value = number.truncate()?;
    let max = self.max_value();
    let magnitude = value.unsigned_abs();
    if magnitude >= u128::from(max) {
      return Err(NumericsError::range(number, max));
    }

    let suffix = match &options.suffix {
      Some(suffix) => Some(suffix.as_str()),
      None if value < 0 => Some(self.language.negative_era()),
      None => None,
    };

    let cardinal = |year: u64| self.spell(year);
    let words = self.language.year_phrase(magnitude as u64, options.long_form, &cardinal)?;
    let words = self.title(&words);

    Ok(match suffix {
      Some(suffix) => format!("{} {}", words, suffix),
      None => words,
    })
  }
}
