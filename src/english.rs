// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! English: vocabulary, merge grammar, ordinals, currencies and years.

use crate::error::Result;
use crate::language::{CurrencyForms, Language, UnitForms};
use crate::split::Fragment;
use crate::vocabulary::Vocabulary;

const BASE_NUMBERS: [&str; 20] = [
  "zero",
  "one",
  "two",
  "three",
  "four",
  "five",
  "six",
  "seven",
  "eight",
  "nine",
  "ten",
  "eleven",
  "twelve",
  "thirteen",
  "fourteen",
  "fifteen",
  "sixteen",
  "seventeen",
  "eighteen",
  "nineteen",
];

const TENS: [&str; 8] = [
  "twenty",
  "thirty",
  "forty",
  "fifty",
  "sixty",
  "seventy",
  "eighty",
  "ninety",
];

// Stems past "quint" overflow a u64 and are dropped by the table.
const ILLION_STEMS: [&str; 5] = ["m", "b", "tr", "quadr", "quint"];

const IRREGULAR_ORDINALS: [(&str, &str); 8] = [
  ("zero", "zeroth"),
  ("one", "first"),
  ("two", "second"),
  ("three", "third"),
  ("five", "fifth"),
  ("eight", "eighth"),
  ("nine", "ninth"),
  ("twelve", "twelfth"),
];

/// Years read as plain cardinals even though the digit-pair rules would apply.
const CARDINAL_YEARS: [u64; 1] = [2001];

static CURRENCIES: [(&str, CurrencyForms); 9] = [
  ("USD", currency(("dollar", "dollars"), ("cent", "cents"), None)),
  ("GBP", currency(("pound", "pounds"), ("penny", "pence"), None)),
  ("EUR", currency(("euro", "euros"), ("cent", "cents"), None)),
  ("MXN", currency(("peso", "pesos"), ("centavo", "centavos"), None)),
  ("UZS", currency(("sum", "sums"), ("tiyin", "tiyins"), None)),
  ("JPY", currency(("yen", "yen"), ("sen", "sen"), None)),
  ("KRW", currency(("won", "won"), ("jeon", "jeon"), None)),
  ("CAD", currency(("dollar", "dollars"), ("cent", "cents"), Some("Canadian"))),
  ("AUD", currency(("dollar", "dollars"), ("cent", "cents"), Some("Australian"))),
];

const fn currency(
  unit: (&'static str, &'static str),
  subunit: (&'static str, &'static str),
  adjective: Option<&'static str>,
) -> CurrencyForms {
  CurrencyForms {
    unit: UnitForms { singular: unit.0, plural: unit.1 },
    subunit: UnitForms { singular: subunit.0, plural: subunit.1 },
    adjective,
  }
}

/// British-style English: "one hundred and one", "twelve thousand, three hundred and forty-five".
#[derive(Debug, Clone)]
pub struct English {
  vocabulary: Vocabulary,
}

impl English {
  /// The English tables, up to the quintillions.
  pub fn new() -> Self {
    let mut vocabulary = Vocabulary::new().units(&BASE_NUMBERS);
    for (i, word) in TENS.iter().enumerate() {
      vocabulary = vocabulary.word(20 + 10 * i as u64, word);
    }
    let vocabulary = vocabulary
        .multiplier(100, "hundred")
        .multiplier(1000, "thousand")
        .illions(6, &ILLION_STEMS);

    English { vocabulary }
  }
}

impl Default for English {
  fn default() -> Self {
    Self::new()
  }
}

impl Language for English {
  fn vocabulary(&self) -> &Vocabulary {
    &self.vocabulary
  }

  fn merge(&self, left: Fragment, right: Fragment) -> Fragment {
    let (lnum, rnum) = (left.magnitude, right.magnitude);

    if lnum == 1 && rnum > 0 && rnum < 100 {
      // "one twenty" is just "twenty".
      return right;
    }
    if lnum > 0 && self.vocabulary.is_multiplier(rnum) {
      return Fragment::new(format!("{} {}", left.text, right.text), lnum.saturating_mul(rnum));
    }
    if (20..=90).contains(&lnum) && lnum % 10 == 0 && (1..=9).contains(&rnum) {
      return Fragment::new(format!("{}-{}", left.text, right.text), lnum + rnum);
    }
    if lnum >= 100 && rnum > 0 && rnum < 100 {
      return Fragment::new(format!("{} and {}", left.text, right.text), lnum + rnum);
    }
    if lnum >= 1000 && rnum > 0 && rnum < lnum {
      let separator = if rnum >= 100 || right.text.contains(',') || right.text.contains(" and ") {
        ", "
      } else {
        " and "
      };
      return Fragment::new(format!("{}{}{}", left.text, separator, right.text),
        lnum.saturating_add(rnum));
    }
    Fragment::new(format!("{} {}", left.text, right.text), lnum.saturating_add(rnum))
  }

  fn pluralize(&self, count: u64, forms: &UnitForms) -> &'static str {
    if count == 1 {
      forms.singular
    } else {
      forms.plural
    }
  }

  fn currency_forms(&self, code: &str) -> Option<&CurrencyForms> {
    CURRENCIES.iter()
        .find(|(known, _)| *known == code)
        .map(|(_, forms)| forms)
  }

  fn negative_word(&self) -> &str {
    "minus"
  }

  fn point_word(&self) -> &str {
    "point"
  }

  fn excluded_title_words(&self) -> &[&str] {
    &["and", "point", "minus"]
  }

  fn ordinal_word(&self, word: &str) -> String {
    let word = word.to_lowercase();
    if let Some((_, ordinal)) = IRREGULAR_ORDINALS.iter().find(|(cardinal, _)| *cardinal == word) {
      return ordinal.to_string();
    }
    match word.strip_suffix('y') {
      Some(stem) => format!("{}ieth", stem),
      None => format!("{}th", word),
    }
  }

  fn ordinal_num_suffix(&self, value: u64) -> &'static str {
    match (value % 100, value % 10) {
      (11..=13, _) => "th",
      (_, 1) => "st",
      (_, 2) => "nd",
      (_, 3) => "rd",
      _ => "th",
    }
  }

  fn year_phrase(
    &self,
    year: u64,
    long_form: bool,
    cardinal: &dyn Fn(u64) -> Result<String>,
  ) -> Result<String> {
    if !long_form {
      return cardinal(year);
    }
    let (high, low) = (year / 100, year % 100);

    if year == 0 || (year >= 1000 && year % 1000 == 0) || CARDINAL_YEARS.contains(&year) {
      return cardinal(year);
    }
    if year < 100 || year >= 10_000 {
      return cardinal(year);
    }
    if low == 0 {
      return Ok(format!("{} hundred", cardinal(high)?));
    }
    if low < 10 {
      return Ok(format!("{} oh-{}", cardinal(high)?, cardinal(low)?));
    }
    Ok(format!("{} {}", cardinal(high)?, cardinal(low)?))
  }
}
