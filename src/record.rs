//! Records stored by the table and the list.

use core::fmt;

/// A value that can be looked up by a string key.
///
/// The key must not change for as long as the record is stored.

pub trait Record {
  fn key(&self) -> &str;
}

impl Record for String {
  #[inline(always)]
  fn key(&self) -> &str {
    return self;
  }
}

impl Record for &str {
  #[inline(always)]
  fn key(&self) -> &str {
    return self;
  }
}

/// One row of a company listing, keyed by its ticker symbol.

#[derive(Clone, Debug, PartialEq)]
pub struct Company {
  pub symbol: String,
  pub name: String,
  pub last_sale: f32,
  pub market_cap: f32,
  pub ipo_year: i32,
}

impl Company {
  #[must_use]
  pub fn new(
    symbol: impl Into<String>,
    name: impl Into<String>,
    last_sale: f32,
    market_cap: f32,
    ipo_year: i32,
  ) -> Self {
    return Self {
      symbol: symbol.into(),
      name: name.into(),
      last_sale,
      market_cap,
      ipo_year,
    };
  }
}

impl Record for Company {
  #[inline(always)]
  fn key(&self) -> &str {
    return &self.symbol;
  }
}

impl fmt::Display for Company {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}:", self.name)?;
    writeln!(f, "\tSymbol: {}", self.symbol)?;
    writeln!(f, "\tLast Sale: {:.2}", self.last_sale)?;
    writeln!(f, "\tMarket Capitalization: {:.2}", self.market_cap)?;
    write!(f, "\tYear of Initial Public Offering: {}", self.ipo_year)?;
    return Ok(());
  }
}

/// Formats the result of a lookup the way the study reports it: the record
/// itself, or a note that nothing is stored under `key`.

pub struct Lookup<'a, R> {
  pub key: &'a str,
  pub found: Option<&'a R>,
}

impl<'a, R: fmt::Display> fmt::Display for Lookup<'a, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    return match self.found {
      Some(r) => write!(f, "{}", r),
      None => write!(f, "Key {} has no corresponding company", self.key),
    };
  }
}
