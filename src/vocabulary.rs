// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Per-language magnitude words.

use std::collections::BTreeMap;

/// One word in a vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnitudeWord {
  /// The value the word stands for.
  pub value: u64,
  /// The word itself.
  pub word: String,
  /// Whether the word scales what precedes it ("hundred", "thousand", the illions).
  pub multiplier: bool,
}

/// Maps magnitudes to words. Lookups are by value; insertion order is irrelevant.
///
/// A usable table holds the unit words, the tens, and at least one multiplier.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
  words: BTreeMap<u64, MagnitudeWord>,
  max_value: Option<u64>,
}

impl Vocabulary {
  /// An empty table.
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert consecutive unit words starting at zero.
  pub fn units(mut self, words: &[&str]) -> Self {
    for (value, word) in words.iter().enumerate() {
      self.insert(value as u64, word, false);
    }
    self
  }

  /// Insert a plain (non-multiplying) word, such as a tens word.
  pub fn word(mut self, value: u64, word: &str) -> Self {
    self.insert(value, word, false);
    self
  }

  /// Insert a multiplying word, such as "hundred".
  pub fn multiplier(mut self, value: u64, word: &str) -> Self {
    self.insert(value, word, true);
    self
  }

  /// Insert the illion series: one multiplier per stem, at 10^`first_power` and every third
  /// power after it. Stems whose magnitude no longer fits in a u64 are skipped.
  pub fn illions(mut self, first_power: usize, stems: &[&str]) -> Self {
    for (i, stem) in stems.iter().enumerate() {
      let power = first_power + 3 * i;
      match num::checked_pow(10u64, power) {
        Some(value) => self.insert(value, &format!("{}illion", stem), true),
        None => break,
      }
    }
    self
  }

  /// Pin the exclusive upper bound instead of deriving it from the largest multiplier.
  pub fn with_max_value(mut self, max_value: u64) -> Self {
    self.max_value = Some(max_value);
    self
  }

  fn insert(&mut self, value: u64, word: &str, multiplier: bool) {
    self.words.insert(value, MagnitudeWord {
      value,
      word: word.to_string(),
      multiplier,
    });
  }

  /// The entry for exactly `value`, if the table has one.
  pub fn get(&self, value: u64) -> Option<&MagnitudeWord> {
    self.words.get(&value)
  }

  /// The word for exactly `value`, if the table has one.
  pub fn lookup(&self, value: u64) -> Option<&str> {
    self.get(value).map(|entry| entry.word.as_str())
  }

  /// Whether `value` is a multiplying word in this table.
  pub fn is_multiplier(&self, value: u64) -> bool {
    self.get(value).map_or(false, |entry| entry.multiplier)
  }

  /// The largest multiplier at or below `value`.
  pub fn largest_multiplier_at_most(&self, value: u64) -> Option<&MagnitudeWord> {
    if value == 0 {
      return None;
    }
    self.words
        .range(1..=value)
        .rev()
        .map(|(_, entry)| entry)
        .find(|entry| entry.multiplier)
  }

  /// The largest tens key (a multiple of ten below one hundred) at or below `value`.
  pub fn largest_tens_at_most(&self, value: u64) -> Option<&MagnitudeWord> {
    if value == 0 {
      return None;
    }
    self.words
        .range(1..=value.min(99))
        .rev()
        .map(|(_, entry)| entry)
        .find(|entry| entry.value % 10 == 0)
  }

  /// The exclusive upper bound on convertible magnitudes.
  ///
  /// Unless pinned, this is a thousand times the largest multiplier, saturating at `u64::MAX`.
  pub fn max_value(&self) -> u64 {
    if let Some(max_value) = self.max_value {
      return max_value;
    }
    self.words
        .values()
        .rev()
        .find(|entry| entry.multiplier)
        .and_then(|entry| entry.value.checked_mul(1000))
        .unwrap_or(u64::max_value())
  }
}
