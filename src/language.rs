// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! The per-language rules the engines are driven by.

use crate::error::Result;
use crate::split::Fragment;
use crate::vocabulary::Vocabulary;

/// Singular and plural forms of a unit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitForms {
  /// Used for a count of one.
  pub singular: &'static str,
  /// Used for every other count.
  pub plural: &'static str,
}

/// The words a currency is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyForms {
  /// The main unit, e.g. dollar/dollars.
  pub unit: UnitForms,
  /// The minor unit, e.g. cent/cents.
  pub subunit: UnitForms,
  /// Qualifier put before the main unit on request, e.g. "Canadian".
  pub adjective: Option<&'static str>,
}

/// Everything language-specific about reading numbers.
///
/// A language supplies its vocabulary and merge grammar; the remaining hooks have neutral
/// defaults, so a bare implementation reads cardinals and leaves ordinals and years as
/// plain cardinals.
pub trait Language {
  /// The magnitude words.
  fn vocabulary(&self) -> &Vocabulary;

  /// Combine two adjacent fragments into one.
  fn merge(&self, left: Fragment, right: Fragment) -> Fragment;

  /// Pick the form of `forms` that goes with `count`.
  fn pluralize(&self, count: u64, forms: &UnitForms) -> &'static str;

  /// The forms for an upper-case currency code.
  fn currency_forms(&self, code: &str) -> Option<&CurrencyForms>;

  /// Word put in front of negative values.
  fn negative_word(&self) -> &str {
    "(-)"
  }

  /// Word separating the integer part from the fractional digits.
  fn point_word(&self) -> &str {
    "(.)"
  }

  /// Words title-casing leaves alone.
  fn excluded_title_words(&self) -> &[&str] {
    &[]
  }

  /// The ordinal form of the last word run of a cardinal, e.g. "one" to "first".
  fn ordinal_word(&self, word: &str) -> String {
    word.to_string()
  }

  /// The suffix written after the digits of an ordinal numeral, e.g. "st" for 1.
  fn ordinal_num_suffix(&self, _value: u64) -> &'static str {
    ""
  }

  /// Era suffix used for negative years when the caller names none.
  fn negative_era(&self) -> &str {
    "BC"
  }

  /// Read a (non-negative) year. `cardinal` reads any value as a plain cardinal.
  fn year_phrase(
    &self,
    year: u64,
    _long_form: bool,
    cardinal: &dyn Fn(u64) -> Result<String>,
  ) -> Result<String> {
    cardinal(year)
  }
}
