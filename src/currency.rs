// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Money amounts: "thirty-eight dollars and forty cents".

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument};

use crate::error::{NumericsError, Result};
use crate::language::Language;
use crate::number::Number;
use crate::Numerics;

/// An amount split into whole units and two-digit sub-units, sign kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyParts {
  /// Whole units, e.g. dollars.
  pub units: u64,
  /// Sub-units, always below one hundred.
  pub subunits: u8,
  /// Whether the amount was below zero.
  pub negative: bool,
}

impl CurrencyParts {
  /// Split `value` into units and sub-units.
  ///
  /// Fractional inputs are rounded half-up to two places first, so `0.995` becomes one unit.
  /// With `integer_as_cents`, a bare integer counts sub-units: `101` is one unit and one
  /// sub-unit.
  pub fn parse(value: &Number, integer_as_cents: bool) -> Result<CurrencyParts> {
    match value {
      Number::Int(amount) => {
        let magnitude = amount.unsigned_abs();
        let (units, subunits) = if integer_as_cents {
          (magnitude / 100, magnitude % 100)
        } else {
          (magnitude, 0)
        };
        if units > u128::from(u64::max_value()) {
          return Err(NumericsError::range(amount, u64::max_value()));
        }
        Ok(CurrencyParts {
          units: units as u64,
          subunits: subunits as u8,
          negative: *amount < 0,
        })
      }
      other => {
        let rounded = other.to_decimal()?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let magnitude = rounded.abs();
        let units = magnitude.trunc()
            .to_u64()
            .ok_or_else(|| NumericsError::range(other, u64::max_value()))?;
        let subunits = (magnitude.fract() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u8()
            .ok_or_else(|| NumericsError::range(other, u64::max_value()))?;
        Ok(CurrencyParts {
          units,
          subunits,
          negative: rounded < Decimal::ZERO,
        })
      }
    }
  }
}

/// How an amount is read out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyOptions {
  /// Read sub-units as words ("forty cents") instead of two digits ("40").
  pub cents_verbose: bool,
  /// Text between the unit phrase and the sub-unit phrase.
  pub separator: String,
  /// Put the currency's adjective before the unit, e.g. "Canadian dollars".
  pub adjective: bool,
  /// Treat bare integers as a count of sub-units.
  pub integer_as_cents: bool,
}

impl Default for CurrencyOptions {
  fn default() -> Self {
    CurrencyOptions {
      cents_verbose: true,
      separator: " and".to_string(),
      adjective: false,
      integer_as_cents: true,
    }
  }
}

impl<L: Language> Numerics<L> {
  /// Read an amount of the currency `code` with the default options.
  /// ```rust
  /// use numwords::Numerics;
  /// let converter = Numerics::default();
  ///
  /// assert_eq!(converter.to_currency(2.5, "GBP").unwrap(), "two pounds and fifty pence");
  /// ```
  pub fn to_currency(&self, value: impl Into<Number>, code: &str) -> Result<String> {
    self.to_currency_with(value, code, &CurrencyOptions::default())
  }

  /// Read an amount of the currency `code`. Codes are case-insensitive.
  pub fn to_currency_with(
    &self,
    value: impl Into<Number>,
    code: &str,
    options: &CurrencyOptions,
  ) -> Result<String> {
    self.currency(&value.into(), code, options)
  }

  #[instrument(level = "trace", skip(self))]
  fn currency(&self, number: &Number, code: &str, options: &CurrencyOptions) -> Result<String> {
    let parts = CurrencyParts::parse(number, options.integer_as_cents)?;
    let code = code.to_uppercase();
    let forms = match self.language.currency_forms(&code) {
      Some(forms) => forms,
      None => {
        debug!(%code, "no currency forms");
        return Err(NumericsError::UnsupportedCurrency(code));
      }
    };

    let unit = self.language.pluralize(parts.units, &forms.unit);
    let unit = match (options.adjective, forms.adjective) {
      (true, Some(adjective)) => format!("{} {}", adjective, unit),
      _ => unit.to_string(),
    };

    let mut out = String::new();
    if parts.negative && (parts.units > 0 || parts.subunits > 0) {
      out.push_str(&self.settings.negative_word);
      out.push(' ');
    }
    out.push_str(&self.title(&self.spell(parts.units)?));
    out.push(' ');
    out.push_str(&unit);

    if number.has_decimal_point() || parts.subunits > 0 {
      out.push_str(&options.separator);
      if options.cents_verbose {
        let subunits = u64::from(parts.subunits);
        out.push(' ');
        out.push_str(&self.title(&self.spell(subunits)?));
        out.push(' ');
        out.push_str(self.language.pluralize(subunits, &forms.subunit));
      } else {
        out.push_str(&format!(" {:02}", parts.subunits));
      }
    }
    Ok(out)
  }
}
