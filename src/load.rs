//! Reads company listings.
//!
//! A listing is a header line followed by one row per company. Fields are
//! comma separated and normally double-quoted, in the column order
//!
//! ```text
//! Symbol, Name, LastSale, MarketCap, ADR TSO, IPOyear, Sector, Industry, Summary Quote
//! ```
//!
//! Only the symbol, name, last sale, market capitalization and IPO year are
//! kept. Numeric fields that do not parse, such as `n/a`, read as zero.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::Error;
use crate::record::Company;

const SYMBOL: usize = 0;
const NAME: usize = 1;
const LAST_SALE: usize = 2;
const MARKET_CAP: usize = 3;
const IPO_YEAR: usize = 5;

const MIN_FIELDS: usize = IPO_YEAR + 1;

/// Reads and parses the listing at `path`.

pub fn read(path: impl AsRef<Path>) -> Result<Vec<Company>, Error> {
  let path = path.as_ref();
  let text = fs::read_to_string(path)?;

  debug!(path = %path.display(), bytes = text.len(), "read listing");

  return parse(&text);
}

/// Parses a listing, skipping its header line and any blank lines.

pub fn parse(text: &str) -> Result<Vec<Company>, Error> {
  let mut lines = text.lines().enumerate().filter(|(_, s)| !s.trim().is_empty());

  if lines.next().is_none() { return Err(Error::MissingHeader); }

  let mut companies = Vec::new();

  for (i, line) in lines {
    companies.push(parse_row(i + 1, line)?);
  }

  debug!(count = companies.len(), "parsed listing");

  return Ok(companies);
}

fn parse_row(line: usize, row: &str) -> Result<Company, Error> {
  let fields = split(row).ok_or(Error::MalformedRecord { line, reason: "unterminated quote" })?;

  if fields.len() < MIN_FIELDS {
    return Err(Error::MalformedRecord { line, reason: "too few fields" });
  }

  if fields[SYMBOL].is_empty() {
    return Err(Error::MalformedRecord { line, reason: "empty symbol" });
  }

  return Ok(Company {
    symbol: fields[SYMBOL].clone(),
    name: fields[NAME].clone(),
    last_sale: fields[LAST_SALE].trim().parse().unwrap_or(0.0),
    market_cap: fields[MARKET_CAP].trim().parse().unwrap_or(0.0),
    ipo_year: fields[IPO_YEAR].trim().parse().unwrap_or(0),
  });
}

// Splits one row into fields. A quoted field may contain commas and doubled
// quotes. Returns `None` if a quoted field never closes.

fn split(row: &str) -> Option<Vec<String>> {
  let mut fields = Vec::new();
  let mut chars = row.chars().peekable();

  loop {
    let mut field = String::new();

    while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}

    if chars.next_if_eq(&'"').is_some() {
      loop {
        match chars.next()? {
          '"' => {
            if chars.next_if_eq(&'"').is_none() { break; }
            field.push('"');
          }
          c => field.push(c),
        }
      }

      while chars.next_if(|c| *c != ',').is_some() {}
    } else {
      while let Some(c) = chars.next_if(|c| *c != ',') {
        field.push(c);
      }

      field.truncate(field.trim_end().len());
    }

    fields.push(field);

    if chars.next().is_none() { break; }
  }

  // A trailing comma ends the row rather than opening an empty last field.

  if row.trim_end().ends_with(',') && fields.last().is_some_and(|s| s.is_empty()) {
    let _: Option<String> = fields.pop();
  }

  return Some(fields);
}
