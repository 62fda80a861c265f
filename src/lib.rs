// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

#![deny(dead_code)]
#![deny(missing_docs)]
#![deny(unreachable_patterns)]
#![deny(unused_extern_crates)]
#![deny(unused_imports)]
#![deny(unused_qualifications)]

//! **Numwords**, a library for reading numbers out as words: cardinals, ordinals, currency
//! amounts and calendar years.
//!
//! Usage:
//!
//! ```rust
//! use numwords::Numerics;
//!
//! let converter = Numerics::builder().build();
//!
//! assert_eq!(converter.to_cardinal(12345).unwrap(),
//!   "twelve thousand, three hundred and forty-five");
//! assert_eq!(converter.to_ordinal(130).unwrap(), "one hundred and thirtieth");
//! assert_eq!(converter.to_currency(1.01, "USD").unwrap(), "one dollar and one cent");
//! assert_eq!(converter.to_year(1901).unwrap(), "nineteen oh-one");
//! ```
//!
//! Integers are split into a tree of vocabulary words ([`split`]), and the tree is folded
//! back into a phrase with the language's merge grammar ([`merge`]). Everything that differs
//! between languages sits behind the [`Language`] trait; [`English`] is the default.

pub mod currency;
pub mod english;
pub mod error;
pub mod language;
pub mod merge;
pub mod number;
pub mod split;
pub mod vocabulary;
pub mod year;

pub use crate::currency::{CurrencyOptions, CurrencyParts};
pub use crate::english::English;
pub use crate::error::{NumericsError, Result};
pub use crate::language::{CurrencyForms, Language, UnitForms};
pub use crate::number::Number;
pub use crate::split::Fragment;
pub use crate::vocabulary::Vocabulary;
pub use crate::year::YearOptions;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument, trace};

/// Fractional digits kept unless configured otherwise.
const DEFAULT_PRECISION: u32 = 2;

/// The most fractional digits a decimal can carry.
const MAX_PRECISION: u32 = 28;

/// How a *Numerics* instance renders its output.
///
/// Fixed at construction except for `title` and `precision`, which have setters on
/// [`Numerics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  /// Capitalize every word not in `exclude_title`.
  pub title: bool,
  /// The most fractional digits read out; extra digits are rounded half-up.
  pub precision: u32,
  /// Words title-casing leaves alone, compared case-insensitively.
  pub exclude_title: Vec<String>,
  /// Word put in front of negative values.
  pub negative_word: String,
  /// Word put between the integer part and the fractional digits.
  pub point_word: String,
}

/// *Numerics* converts numbers into their word readings for one language.
///
/// An instance is self-contained: its tables are built once and only read afterwards.
#[derive(Debug, Clone)]
pub struct Numerics<L = English> {
  language: L,
  settings: Settings,
}

/// *NumericsBuilder* lets you configure a *Numerics* instance.
#[derive(Debug, Clone)]
pub struct NumericsBuilder<L = English> {
  language: L,
  title: bool,
  precision: u32,
  custom_excluded_title_words: Option<Vec<String>>,
  custom_negative_word: Option<String>,
  custom_point_word: Option<String>,
}

impl Numerics<English> {
  /// Configure an English instance.
  pub fn builder() -> NumericsBuilder<English> {
    NumericsBuilder::new(English::new())
  }
}

impl Default for Numerics<English> {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl<L: Language> Numerics<L> {
  /// Configure an instance for `language`.
  pub fn with_language(language: L) -> NumericsBuilder<L> {
    NumericsBuilder::new(language)
  }

  /// The language rules in use.
  pub fn language(&self) -> &L {
    &self.language
  }

  /// The current settings.
  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  /// Turn title-casing on or off.
  pub fn set_title(&mut self, title: bool) {
    self.settings.title = title;
  }

  /// Change how many fractional digits are read out.
  pub fn set_precision(&mut self, precision: u32) {
    self.settings.precision = precision.min(MAX_PRECISION);
  }

  /// The exclusive upper bound on the absolute value of anything converted.
  pub fn max_value(&self) -> u64 {
    self.language.vocabulary().max_value()
  }

  /// Read a number as a cardinal.
  /// ```rust
  /// use numwords::Numerics;
  /// let converter = Numerics::default();
  ///
  /// assert_eq!(converter.to_cardinal(199).unwrap(), "one hundred and ninety-nine");
  /// assert_eq!(converter.to_cardinal(-0.75).unwrap(), "minus zero point seven five");
  /// ```
  pub fn to_cardinal(&self, value: impl Into<Number>) -> Result<String> {
    let words = self.cardinal(&value.into())?;
    Ok(self.title(&words))
  }

  /// Read a number as a cardinal with `precision` fractional digits for this call only.
  pub fn to_cardinal_float(&self, value: impl Into<Number>, precision: u32) -> Result<String> {
    let value = value.into().to_decimal()?;
    let words = self.cardinal_decimal(value, precision.min(MAX_PRECISION))?;
    Ok(self.title(&words))
  }

  /// Read a non-negative integer as an ordinal ("forty-second").
  pub fn to_ordinal(&self, value: impl Into<Number>) -> Result<String> {
    let value = self.ordinal_value(&value.into())?;
    let cardinal = self.spell(value)?;
    Ok(self.title(&self.ordinalize(&cardinal)))
  }

  /// Write a non-negative integer as an ordinal numeral ("42nd").
  pub fn to_ordinal_num(&self, value: impl Into<Number>) -> Result<String> {
    let value = self.ordinal_value(&value.into())?;
    Ok(format!("{}{}", value, self.language.ordinal_num_suffix(value)))
  }

  /// Capitalize every word of `value` outside the excluded list, if title-casing is on.
  pub fn title(&self, value: &str) -> String {
    if !self.settings.title {
      return value.to_string();
    }
    value.split(' ')
        .map(|word| {
          let excluded = self.settings.exclude_title
              .iter()
              .any(|skip| skip.to_lowercase() == word.to_lowercase());
          if excluded || word.trim().is_empty() {
            return word.to_string();
          }
          let mut chars = word.chars();
          match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
          }
        })
        .collect::<Vec<String>>()
        .join(" ")
  }

  #[instrument(level = "trace", skip(self))]
  fn cardinal(&self, number: &Number) -> Result<String> {
    match number {
      Number::Int(value) => self.cardinal_integer(*value),
      other => self.cardinal_decimal(other.to_decimal()?, self.settings.precision),
    }
  }

  fn cardinal_integer(&self, value: i128) -> Result<String> {
    let max = self.max_value();
    let magnitude = value.unsigned_abs();
    // Checked before narrowing to u64; `spell` only sees the magnitude.
    if magnitude >= u128::from(max) {
      debug!(%value, max, "value out of range");
      return Err(NumericsError::range(value, max));
    }

    let words = self.spell(magnitude as u64)?;
    if value < 0 {
      Ok(format!("{} {}", self.settings.negative_word, words))
    } else {
      Ok(words)
    }
  }

  fn cardinal_decimal(&self, value: Decimal, precision: u32) -> Result<String> {
    let max = self.max_value();
    let negative = value.is_sign_negative() && !value.is_zero();
    let digits = value.scale().min(precision);

    // Round the whole value so a carry reaches the integer part.
    let mut rounded = value.abs()
        .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);

    let whole = rounded.trunc()
        .to_u64()
        .filter(|whole| *whole < max)
        .ok_or_else(|| {
          debug!(%value, max, "integer part out of range");
          NumericsError::range(value, max)
        })?;

    let mut words = self.spell(whole)?;
    if negative {
      words = format!("{} {}", self.settings.negative_word, words);
    }

    if digits > 0 {
      let text = rounded.to_string();
      let fraction = text.split('.').nth(1).unwrap_or("");
      words.push(' ');
      words.push_str(&self.settings.point_word);
      for digit in fraction.chars().filter_map(|c| c.to_digit(10)) {
        words.push(' ');
        words.push_str(&self.spell(u64::from(digit))?);
      }
    }
    Ok(words)
  }

  /// The untitled cardinal of a non-negative integer.
  ///
  /// Holds the range check for every caller: ordinals, years, currency amounts and the
  /// integer part of fractions all reach the vocabulary through here.
  fn spell(&self, value: u64) -> Result<String> {
    let vocabulary = self.language.vocabulary();
    let max = vocabulary.max_value();
    if value >= max {
      return Err(NumericsError::range(value, max));
    }
    if value == 0 {
      return vocabulary.lookup(0)
          .map(str::to_string)
          .ok_or(NumericsError::Structural(0));
    }

    let tree = split::split(value, vocabulary)?;
    trace!(value, ?tree, "decomposed");
    let join = |left: Fragment, right: Fragment| self.language.merge(left, right);
    Ok(merge::clean(tree, &join).text)
  }

  #[instrument(level = "trace", skip(self))]
  fn ordinal_value(&self, number: &Number) -> Result<u64> {
    let max = self.max_value();
    let value = match number {
      Number::Int(value) => *value,
      other => {
        let value = other.to_decimal()?;
        if !value.fract().is_zero() {
          return Err(NumericsError::OrdinalType(other.to_string()));
        }
        value.to_i128().ok_or_else(|| NumericsError::range(other, max))?
      }
    };

    if value < 0 {
      return Err(NumericsError::OrdinalRange(number.to_string()));
    }
    if value >= i128::from(max) {
      return Err(NumericsError::range(number, max));
    }
    Ok(value as u64)
  }

  /// Hand the trailing word run (after the last space and the last hyphen) to the language.
  fn ordinalize(&self, cardinal: &str) -> String {
    let (head, last) = match cardinal.rfind(' ') {
      Some(i) => cardinal.split_at(i + 1),
      None => ("", cardinal),
    };
    let (stem, run) = match last.rfind('-') {
      Some(i) => last.split_at(i + 1),
      None => ("", last),
    };
    format!("{}{}{}", head, stem, self.language.ordinal_word(run))
  }
}

impl<L: Language> NumericsBuilder<L> {
  fn new(language: L) -> Self {
    NumericsBuilder {
      language,
      title: false,
      precision: DEFAULT_PRECISION,
      custom_excluded_title_words: None,
      custom_negative_word: None,
      custom_point_word: None,
    }
  }

  /// Set a custom word to use to denote negative numbers.
  /// By default the language's word is used ("minus" in English).
  /// You can unset your override by supplying 'None'.
  pub fn set_custom_negative_word(mut self, word: Option<&str>) -> NumericsBuilder<L> {
    self.custom_negative_word = word.map(|s| s.trim().to_string());
    self
  }

  /// Set a custom word to read between the integer part and the fractional digits.
  /// You can unset your override by supplying 'None'.
  pub fn set_custom_point_word(mut self, word: Option<&str>) -> NumericsBuilder<L> {
    self.custom_point_word = word.map(|s| s.trim().to_string());
    self
  }

  /// Replace the language's list of words that title-casing leaves alone.
  /// You can unset your override by supplying 'None'.
  pub fn set_excluded_title_words(mut self, words: Option<&[&str]>) -> NumericsBuilder<L> {
    self.custom_excluded_title_words = words
        .map(|words| words.iter().map(|word| word.to_string()).collect());
    self
  }

  /// Capitalize each word of the output.
  pub fn set_title(mut self, title: bool) -> NumericsBuilder<L> {
    self.title = title;
    self
  }

  /// Read at most `precision` fractional digits.
  pub fn set_precision(mut self, precision: u32) -> NumericsBuilder<L> {
    self.precision = precision.min(MAX_PRECISION);
    self
  }

  /// Creates the Numerics instance, consuming the NumericsBuilder.
  pub fn build(self) -> Numerics<L> {
    let language = self.language;
    let settings = Settings {
      title: self.title,
      precision: self.precision,
      exclude_title: self.custom_excluded_title_words.unwrap_or_else(|| {
        language.excluded_title_words().iter().map(|word| word.to_string()).collect()
      }),
      negative_word: self.custom_negative_word
          .unwrap_or_else(|| language.negative_word().to_string()),
      point_word: self.custom_point_word
          .unwrap_or_else(|| language.point_word().to_string()),
    };
    Numerics { language, settings }
  }
}

#[cfg(test)]
mod tests {
  use crate::{Fragment, Language, Numerics, NumericsError, UnitForms, CurrencyForms, Vocabulary};
  use rust_decimal::Decimal;
  use std::str::FromStr;

  #[test]
  fn positive_integers_ones_and_teens() {
    assert_eq!("zero", number_to_words(0));
    assert_eq!("one", number_to_words(1));
    assert_eq!("nine", number_to_words(9));
    assert_eq!("ten", number_to_words(10));
    assert_eq!("twelve", number_to_words(12));
    assert_eq!("nineteen", number_to_words(19));
  }

  #[test]
  fn positive_integers_tens() {
    assert_eq!("twenty", number_to_words(20));
    assert_eq!("twenty-one", number_to_words(21));
    assert_eq!("forty-four", number_to_words(44));
    assert_eq!("seventy", number_to_words(70));
    assert_eq!("ninety-nine", number_to_words(99));
  }

  #[test]
  fn positive_integers_hundreds() {
    assert_eq!("one hundred", number_to_words(100));
    assert_eq!("one hundred and one", number_to_words(101));
    assert_eq!("one hundred and five", number_to_words(105));
    assert_eq!("one hundred and twenty-three", number_to_words(123));
    assert_eq!("one hundred and ninety-nine", number_to_words(199));
    assert_eq!("nine hundred", number_to_words(900));
    assert_eq!("nine hundred and ninety-nine", number_to_words(999));
  }

  #[test]
  fn positive_integers_magnitudes() {
    assert_eq!("one thousand", number_to_words(1_000));
    assert_eq!("one thousand and one", number_to_words(1_001));
    assert_eq!("twelve thousand, three hundred and forty-five", number_to_words(12_345));
    assert_eq!("one hundred thousand", number_to_words(100_000));
    assert_eq!("one million", number_to_words(1_000_000));
    assert_eq!("one million and one", number_to_words(1_000_001));
    assert_eq!(w(r#"one million, two hundred and thirty-four thousand,
                    five hundred and sixty-seven"#), number_to_words(1_234_567));
    assert_eq!("one billion", number_to_words(1_000_000_000));
    assert_eq!("one quintillion", number_to_words(1_000_000_000_000_000_000));
  }

  #[test]
  fn thousands_separator_edge_cases() {
    // A bare hundred remainder scales rather than joins.
    assert_eq!("one thousand one hundred", number_to_words(1_100));
    assert_eq!("one thousand, one hundred and fifty", number_to_words(1_150));
    assert_eq!("two thousand and ninety-nine", number_to_words(2_099));
    assert_eq!("one million, one hundred thousand", number_to_words(1_100_000));
  }

  #[test]
  fn signed_integer_bounds() {
    let converter = Numerics::default();
    assert_eq!(w(r#"nine quintillion, two hundred and twenty-three quadrillion,
                    three hundred and seventy-two trillion, thirty-six billion,
                    eight hundred and fifty-four million, seven hundred and seventy-five thousand,
                    eight hundred and seven"#),
      converter.to_cardinal(i64::max_value()).unwrap());
    assert_eq!(w(r#"minus nine quintillion, two hundred and twenty-three quadrillion,
                    three hundred and seventy-two trillion, thirty-six billion,
                    eight hundred and fifty-four million, seven hundred and seventy-five thousand,
                    eight hundred and eight"#),
      converter.to_cardinal(i64::min_value()).unwrap());
  }

  #[test]
  fn negative_integers() {
    assert_eq!("minus one", number_to_words(-1));
    assert_eq!("minus forty-two", number_to_words(-42));
    assert_eq!("minus nine thousand and one", number_to_words(-9_001));
    assert_eq!("zero", number_to_words(-0));
  }

  #[test]
  fn negative_word_config() {
    let minus_converter = Numerics::default();
    let negative_converter = Numerics::builder()
        .set_custom_negative_word(Some("negative"))
        .build();

    assert_eq!("minus one hundred", minus_converter.to_cardinal(-100).unwrap());
    assert_eq!("negative one hundred", negative_converter.to_cardinal(-100).unwrap());
    assert_eq!("negative zero point five", negative_converter.to_cardinal(-0.5).unwrap());
  }

  #[test]
  fn overflow_is_a_range_error() {
    let converter = Numerics::default();
    assert_eq!(u64::max_value(), converter.max_value());
    assert!(matches!(converter.to_cardinal(u64::max_value()), Err(NumericsError::Range { .. })));
    assert!(matches!(converter.to_cardinal(-(u64::max_value() as i128)),
      Err(NumericsError::Range { .. })));
    assert!(matches!(converter.to_cardinal(i128::max_value()), Err(NumericsError::Range { .. })));
    assert!(matches!(converter.to_cardinal(dec("100000000000000000000")),
      Err(NumericsError::Range { .. })));

    let huge = format!("1{}", "0".repeat(102));
    assert!(matches!(converter.to_cardinal(huge), Err(NumericsError::Range { .. })));
    assert!(converter.to_cardinal(u64::max_value() - 1).is_ok());
  }

  #[test]
  fn unsupported_inputs() {
    let converter = Numerics::default();
    assert!(matches!(converter.to_cardinal(f64::NAN), Err(NumericsError::UnsupportedType(_))));
    assert!(matches!(converter.to_cardinal("twelve"), Err(NumericsError::UnsupportedType(_))));
  }

  #[test]
  fn scientific_text_inputs() {
    let converter = Numerics::default();
    assert_eq!("zero point zero zero", converter.to_cardinal("1e-30").unwrap());
    assert_eq!(converter.to_cardinal(1e-30).unwrap(), converter.to_cardinal("1e-30").unwrap());
    assert_eq!("one thousand, two hundred", converter.to_cardinal("1.2e3").unwrap());
    assert!(matches!(converter.to_cardinal("1e30"), Err(NumericsError::Range { .. })));
    assert!(matches!(converter.to_year("1e30"), Err(NumericsError::Range { .. })));
  }

  #[test]
  fn cardinal_floats() {
    let converter = Numerics::default();
    assert_eq!("zero point one two", converter.to_cardinal(0.12).unwrap());
    assert_eq!("minus zero point one two", converter.to_cardinal(-0.12).unwrap());
    assert_eq!("zero point one", converter.to_cardinal(0.1).unwrap());
    assert_eq!("twelve point five", converter.to_cardinal(12.50).unwrap());
    assert_eq!("twelve point five one", converter.to_cardinal(12.51).unwrap());
    assert_eq!("fifteen point four two", converter.to_cardinal(15.42).unwrap());
    assert_eq!("minus twenty-five point zero one", converter.to_cardinal(-25.01).unwrap());
    assert_eq!("one point zero", converter.to_cardinal(1.0).unwrap());
    assert_eq!("zero point zero", converter.to_cardinal(0.0).unwrap());
  }

  #[test]
  fn cardinal_decimals_keep_their_scale() {
    let converter = Numerics::default();
    assert_eq!("twelve point five zero", converter.to_cardinal(dec("12.50")).unwrap());
    assert_eq!("twelve point five nine", converter.to_cardinal(dec("12.59")).unwrap());
    assert_eq!("zero point five", converter.to_cardinal(dec("0.5")).unwrap());
    assert_eq!("minus zero point seven five", converter.to_cardinal(dec("-0.75")).unwrap());
    assert_eq!("one point zero", converter.to_cardinal(dec("1.0")).unwrap());
    assert_eq!("one point zero zero", converter.to_cardinal(dec("1.00")).unwrap());
    assert_eq!("twelve", converter.to_cardinal(dec("12")).unwrap());
    assert_eq!("twelve point five zero", converter.to_cardinal("12.50").unwrap());
  }

  #[test]
  fn cardinal_float_precision() {
    let converter = Numerics::default();
    assert_eq!("twelve point three five", converter.to_cardinal(dec("12.345")).unwrap());
    assert_eq!(w("nine hundred and eighty-seven point six five four three"),
      converter.to_cardinal_float(dec("987.654321"), 4).unwrap());
    assert_eq!(w("one hundred and twenty-three point four five six"),
      converter.to_cardinal_float(123.456, 3).unwrap());
    assert_eq!("one point zero zero", converter.to_cardinal_float(0.996, 2).unwrap());
    assert_eq!("three", converter.to_cardinal_float(2.5, 0).unwrap());
    assert_eq!("seven", converter.to_cardinal_float(7, 4).unwrap());

    let mut converter = converter;
    converter.set_precision(1);
    assert_eq!("zero point one", converter.to_cardinal(0.12).unwrap());
    converter.set_precision(99);
    assert_eq!(28, converter.settings().precision);
  }

  #[test]
  fn title_casing() {
    let mut converter = Numerics::builder().set_title(true).build();
    assert_eq!("One Hundred and One", converter.to_cardinal(101).unwrap());
    assert_eq!("minus Zero point Seven Five", converter.to_cardinal(dec("-0.75")).unwrap());
    assert_eq!("Twenty-first", converter.to_ordinal(21).unwrap());
    assert_eq!("One Hundred and First", converter.to_ordinal(101).unwrap());

    converter.set_title(false);
    assert_eq!("one hundred and one", converter.to_cardinal(101).unwrap());
  }

  #[test]
  fn title_respects_exclusions() {
    let converter = Numerics::with_language(Stub::new()).set_title(true).build();
    assert_eq!("One Test", converter.title("one test"));
    assert_eq!("One Test", converter.title(&converter.title("one test")));

    let converter = Numerics::with_language(Stub::new())
        .set_title(true)
        .set_excluded_title_words(Some(&["test"][..]))
        .build();
    assert_eq!("One test", converter.title("one test"));

    let converter = Numerics::with_language(Stub::new())
        .set_title(true)
        .set_excluded_title_words(Some(&["and", "the"][..]))
        .build();
    assert_eq!("One and the Other", converter.title("one and the other"));

    let untitled = Numerics::with_language(Stub::new()).build();
    assert_eq!("one test", untitled.title("one test"));
  }

  #[test]
  fn ordinals() {
    let converter = Numerics::default();
    assert_eq!("zeroth", converter.to_ordinal(0).unwrap());
    assert_eq!("first", converter.to_ordinal(1).unwrap());
    assert_eq!("second", converter.to_ordinal(2).unwrap());
    assert_eq!("third", converter.to_ordinal(3).unwrap());
    assert_eq!("fourth", converter.to_ordinal(4).unwrap());
    assert_eq!("eleventh", converter.to_ordinal(11).unwrap());
    assert_eq!("twelfth", converter.to_ordinal(12).unwrap());
    assert_eq!("thirteenth", converter.to_ordinal(13).unwrap());
    assert_eq!("twentieth", converter.to_ordinal(20).unwrap());
    assert_eq!("twenty-first", converter.to_ordinal(21).unwrap());
    assert_eq!("twenty-second", converter.to_ordinal(22).unwrap());
    assert_eq!("one hundred and first", converter.to_ordinal(101).unwrap());
    assert_eq!("one hundred and thirtieth", converter.to_ordinal(130).unwrap());
    assert_eq!("one thousand and third", converter.to_ordinal(1003).unwrap());
    assert_eq!("one thousandth", converter.to_ordinal(1000).unwrap());
    assert_eq!("twelve thousand, three hundred and forty-fifth", converter.to_ordinal(12_345).unwrap());
    assert_eq!("tenth", converter.to_ordinal(10.0).unwrap());
    assert_eq!("third", converter.to_ordinal("3").unwrap());
  }

  #[test]
  fn ordinal_validation() {
    let converter = Numerics::default();
    assert!(matches!(converter.to_ordinal(10.5), Err(NumericsError::OrdinalType(_))));
    assert!(matches!(converter.to_ordinal(dec("1.25")), Err(NumericsError::OrdinalType(_))));
    assert!(matches!(converter.to_ordinal(-5), Err(NumericsError::OrdinalRange(_))));
    assert!(matches!(converter.to_ordinal(-5.0), Err(NumericsError::OrdinalRange(_))));
    assert!(matches!(converter.to_ordinal(-5.5), Err(NumericsError::OrdinalType(_))));
    assert!(matches!(converter.to_ordinal_num(-5), Err(NumericsError::OrdinalRange(_))));
    assert!(matches!(converter.to_ordinal_num(1.5), Err(NumericsError::OrdinalType(_))));
    assert!(matches!(converter.to_ordinal(u64::max_value()), Err(NumericsError::Range { .. })));
  }

  #[test]
  fn ordinal_numerals() {
    let converter = Numerics::default();
    assert_eq!("0th", converter.to_ordinal_num(0).unwrap());
    assert_eq!("1st", converter.to_ordinal_num(1).unwrap());
    assert_eq!("2nd", converter.to_ordinal_num(2).unwrap());
    assert_eq!("3rd", converter.to_ordinal_num(3).unwrap());
    assert_eq!("4th", converter.to_ordinal_num(4).unwrap());
    assert_eq!("10th", converter.to_ordinal_num(10).unwrap());
    assert_eq!("11th", converter.to_ordinal_num(11).unwrap());
    assert_eq!("21st", converter.to_ordinal_num(21).unwrap());
    assert_eq!("73rd", converter.to_ordinal_num(73).unwrap());
    assert_eq!("102nd", converter.to_ordinal_num(102).unwrap());
    assert_eq!("112th", converter.to_ordinal_num(112).unwrap());
  }

  #[test]
  fn bare_language_defaults() {
    let converter = Numerics::with_language(Stub::new()).build();
    assert_eq!("val_9_stub", converter.to_cardinal(9).unwrap());
    assert_eq!("twenty_stub", converter.to_cardinal(20).unwrap());
    assert_eq!("zero_stub", converter.to_cardinal(0).unwrap());
    assert_eq!("(-) val_9_stub", converter.to_cardinal(-9).unwrap());
    assert_eq!("val_1_stub (.) val_5_stub", converter.to_cardinal(1.5).unwrap());

    // Ordinals and years fall back to cardinals, ordinal numerals to plain digits.
    assert_eq!("val_1_stub", converter.to_ordinal(1).unwrap());
    assert_eq!("zero_stub", converter.to_ordinal(0).unwrap());
    assert_eq!("100", converter.to_ordinal_num(100).unwrap());
    assert_eq!("val_10_stub", converter.to_year(10).unwrap());
    assert_eq!("val_10_stub BC", converter.to_year(-10).unwrap());
  }

  #[test]
  fn bare_language_bounds() {
    let converter = Numerics::with_language(Stub::new()).build();
    assert_eq!(1000, converter.max_value());
    assert!(converter.to_cardinal(999).is_ok());
    assert!(matches!(converter.to_cardinal(1000), Err(NumericsError::Range { .. })));
    assert!(matches!(converter.to_cardinal(1001), Err(NumericsError::Range { .. })));
    assert!(matches!(converter.to_currency(dec("1.00"), "EUR"),
      Err(NumericsError::UnsupportedCurrency(_))));
  }

  #[test]
  fn incomplete_vocabulary_is_structural() {
    let converter = Numerics::with_language(Stub::with_vocabulary(
      Vocabulary::new().units(&["zero", "one"]))).build();
    assert_eq!("one", converter.to_cardinal(1).unwrap());
    assert_eq!(Err(NumericsError::Structural(7)), converter.to_cardinal(7));

    let converter = Numerics::with_language(Stub::with_vocabulary(
      Vocabulary::new().word(1, "one").word(20, "twenty"))).build();
    assert_eq!(Err(NumericsError::Structural(0)), converter.to_cardinal(0));
  }

  /// A language with placeholder words and a trivial merge.
  struct Stub {
    vocabulary: Vocabulary,
  }

  impl Stub {
    fn new() -> Self {
      let units: Vec<String> = (1..20).map(|i| format!("val_{}_stub", i)).collect();
      let mut vocabulary = Vocabulary::new().word(0, "zero_stub");
      for (i, word) in units.iter().enumerate() {
        vocabulary = vocabulary.word(i as u64 + 1, word);
      }
      let vocabulary = vocabulary
          .word(20, "twenty_stub")
          .word(30, "thirty_stub")
          .word(40, "forty_stub")
          .word(50, "fifty_stub")
          .word(60, "sixty_stub")
          .word(70, "seventy_stub")
          .word(80, "eighty_stub")
          .word(90, "ninety_stub")
          .multiplier(100, "hundred_stub")
          .with_max_value(1000);
      Self::with_vocabulary(vocabulary)
    }

    fn with_vocabulary(vocabulary: Vocabulary) -> Self {
      Stub { vocabulary }
    }
  }

  impl Language for Stub {
    fn vocabulary(&self) -> &Vocabulary {
      &self.vocabulary
    }

    fn merge(&self, left: Fragment, right: Fragment) -> Fragment {
      Fragment::new(format!("{}_{}", left.text, right.text), left.magnitude + right.magnitude)
    }

    fn pluralize(&self, count: u64, forms: &UnitForms) -> &'static str {
      if count == 1 { forms.singular } else { forms.plural }
    }

    fn currency_forms(&self, _code: &str) -> Option<&CurrencyForms> {
      None
    }
  }

  // Test helper
  fn w(words: &str) -> String {
    words.split_whitespace().collect::<Vec<&str>>().join(" ")
  }

  // Test helper
  fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).unwrap()
  }

  // Test helper
  fn number_to_words(number: i64) -> String {
    Numerics::default()
        .to_cardinal(number)
        .unwrap()
  }
}
