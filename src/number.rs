// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! The numeric input kinds the converters accept.

use std::fmt;
use std::str::FromStr;

use num::Integer;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{NumericsError, Result};

/// The most fractional digits a decimal can carry.
const MAX_SCALE: u32 = 28;

/// A number handed to one of the converters.
///
/// Every primitive integer, both float widths, [`Decimal`] and text convert into this with
/// `From`, so the public methods take `impl Into<Number>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
  /// Any primitive integer, widened so that both `i64::MIN` and `u64::MAX` fit.
  Int(i128),
  /// A binary float. Read through its shortest decimal rendering, never its binary expansion.
  Float(f64),
  /// An exact decimal. Its scale is significant: `1.00` reads differently from `1`.
  Decimal(Decimal),
  /// Decimal text such as `"12.50"` or `"-1.2e3"`.
  Text(String),
}

impl Number {
  /// Whether the input was written with decimal semantics.
  ///
  /// Floats always are; decimals when they carry a scale; text when it contains a point.
  pub fn has_decimal_point(&self) -> bool {
    match self {
      Number::Int(_) => false,
      Number::Float(_) => true,
      Number::Decimal(value) => value.scale() > 0,
      Number::Text(text) => text.contains('.'),
    }
  }

  /// The exact decimal this input stands for.
  pub fn to_decimal(&self) -> Result<Decimal> {
    match self {
      Number::Int(value) => Decimal::from_i128(*value)
          .ok_or_else(|| NumericsError::range(value, u64::MAX)),
      Number::Float(value) => float_to_decimal(*value),
      Number::Decimal(value) => Ok(*value),
      Number::Text(text) => text_to_decimal(text),
    }
  }

  /// The integer part, truncating any fraction toward zero.
  pub(crate) fn truncate(&self) -> Result<i128> {
    match self {
      Number::Int(value) => Ok(*value),
      other => {
        let value = other.to_decimal()?;
        value.trunc()
            .to_i128()
            .ok_or_else(|| NumericsError::range(value, u64::MAX))
      }
    }
  }
}

impl fmt::Display for Number {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Number::Int(value) => write!(f, "{}", value),
      Number::Float(value) => write!(f, "{}", value),
      Number::Decimal(value) => write!(f, "{}", value),
      Number::Text(text) => write!(f, "{}", text),
    }
  }
}

fn float_to_decimal(value: f64) -> Result<Decimal> {
  if !value.is_finite() {
    return Err(NumericsError::UnsupportedType(format!("float {}", value)));
  }
  // A float is a fractional kind: `1.0` keeps its one digit of scale.
  let mut text = value.to_string();
  if !text.contains('.') {
    text.push_str(".0");
  }
  Decimal::from_str(&text).map_err(|_| NumericsError::range(&text, u64::MAX))
}

fn text_to_decimal(text: &str) -> Result<Decimal> {
  let trimmed = text.trim();
  Decimal::from_str(trimmed)
      .or_else(|_| Decimal::from_scientific(trimmed))
      .ok()
      .or_else(|| tiny_scientific(trimmed))
      .ok_or_else(|| {
        if looks_numeric(trimmed) {
          NumericsError::range(trimmed, u64::MAX)
        } else {
          NumericsError::UnsupportedType(format!("text {:?}", trimmed))
        }
      })
}

/// Scientific text whose negative exponent pushes the scale past what a decimal holds,
/// rounded half-up at the maximum scale.
fn tiny_scientific(text: &str) -> Option<Decimal> {
  let split = text.find(|c: char| c == 'e' || c == 'E')?;
  let mantissa = Decimal::from_str(&text[..split]).ok()?;
  let exponent = text[split + 1..].parse::<i64>().ok()?;
  if exponent >= 0 {
    return None;
  }

  let excess = i64::from(mantissa.scale())
      .saturating_sub(exponent)
      .saturating_sub(i64::from(MAX_SCALE));
  if excess <= 0 {
    return None;
  }
  // A decimal mantissa stays below 10^29, so it rounds away entirely past 30 digits.
  if excess > 30 {
    return Some(Decimal::ZERO);
  }

  let divisor = 10i128.pow(excess as u32);
  let (quotient, remainder) = mantissa.mantissa().div_rem(&divisor);
  let quotient = if remainder.abs() * 2 >= divisor {
    quotient + mantissa.mantissa().signum()
  } else {
    quotient
  };
  Some(Decimal::from_i128_with_scale(quotient, MAX_SCALE))
}

/// Decimal or scientific notation that merely failed to fit.
fn looks_numeric(text: &str) -> bool {
  let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
    Some(split) => (&text[..split], Some(&text[split + 1..])),
    None => (text, None),
  };
  let body = unsigned(mantissa);
  let mantissa_ok = body.chars().any(|c| c.is_ascii_digit())
      && body.chars().all(|c| c.is_ascii_digit() || c == '.')
      && body.matches('.').count() <= 1;
  let exponent_ok = exponent.map_or(true, |exponent| {
    let digits = unsigned(exponent);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
  });
  mantissa_ok && exponent_ok
}

fn unsigned(text: &str) -> &str {
  text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text)
}

// Every primitive integer widens losslessly into an i128.
macro_rules! integer_number_impl {
  ($($t:ty)*) => ($(
    impl From<$t> for Number {
      #[inline]
      fn from(value: $t) -> Self {
        Number::Int(value as i128)
      }
    }
  )*)
}

integer_number_impl!(usize u8 u16 u32 u64 isize i8 i16 i32 i64 i128);

impl From<f64> for Number {
  #[inline]
  fn from(value: f64) -> Self {
    Number::Float(value)
  }
}

impl From<f32> for Number {
  fn from(value: f32) -> Self {
    // Widen through the shortest text so 0.1f32 stays 0.1.
    let widened = value.to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(value));
    Number::Float(widened)
  }
}

impl From<Decimal> for Number {
  #[inline]
  fn from(value: Decimal) -> Self {
    Number::Decimal(value)
  }
}

impl From<&str> for Number {
  #[inline]
  fn from(value: &str) -> Self {
    Number::Text(value.to_string())
  }
}

impl From<String> for Number {
  #[inline]
  fn from(value: String) -> Self {
    Number::Text(value)
  }
}
