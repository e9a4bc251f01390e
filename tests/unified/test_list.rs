use expect_test::expect;
use std::fmt::Write;
use tickermap::list::List;
use tickermap::list::internal;
use tickermap::record::Company;

use crate::util;

#[test]
fn test_basic() -> Result<(), std::fmt::Error> {
  let mut s = String::new();
  let records = ["A", "B", "C", "D", "E"].map(util::company);
  let mut l = List::<Company>::new();

  writeln!(s, "{:?} <- l.len()", l.len())?;
  writeln!(s, "{:?} <- l.is_empty()", l.is_empty())?;
  writeln!(s, "{:?} <- l.fetch({:?})", l.fetch("A").map(|c| &c.symbol), "A")?;

  for r in records.iter() {
    l = l.insert(r);
  }

  writeln!(s, "{:?} <- l.len()", l.len())?;
  writeln!(s, "{:?} <- l.is_empty()", l.is_empty())?;

  for key in ["A", "C", "E", "F"] {
    writeln!(s, "{:?} <- l.fetch({:?})", l.fetch(key).map(|c| &c.symbol), key)?;
  }

  let order: Vec<&str> = l.iter().map(|c| c.symbol.as_str()).collect();
  writeln!(s, "{:?} <- l.iter()", order)?;

  expect![[r#"
      0 <- l.len()
      true <- l.is_empty()
      None <- l.fetch("A")
      5 <- l.len()
      false <- l.is_empty()
      Some("A") <- l.fetch("A")
      Some("C") <- l.fetch("C")
      Some("E") <- l.fetch("E")
      None <- l.fetch("F")
      ["E", "D", "C", "B", "A"] <- l.iter()
  "#]].assert_eq(&s);

  Ok(())
}

#[test]
fn test_depth() {
  let mut g = util::rng();
  let records: Vec<Company> = util::symbols(&mut g, 100).iter().map(|k| util::company(k)).collect();
  let mut l = List::<Company>::new();

  for r in records.iter() {
    l = l.insert(r);
  }

  let n = records.len();

  assert_eq!(internal::depth(&l, &records[n - 1].symbol), Some(0));
  assert_eq!(internal::depth(&l, &records[0].symbol), Some(n - 1));

  for (i, r) in records.iter().enumerate() {
    assert_eq!(internal::depth(&l, &r.symbol), Some(n - 1 - i));
    assert_eq!(l.fetch(&r.symbol), Some(r));
  }

  assert_eq!(internal::depth(&l, "not a symbol"), None);
}

#[test]
fn test_borrows_records() {
  let records = ["A", "B"].map(util::company);
  let l = List::<Company>::new().insert(&records[0]).insert(&records[1]);

  let a = l.fetch("A");

  assert!(a.is_some_and(|a| std::ptr::eq(a, &records[0])));
  assert_eq!(l.iter().len(), 2);
}

#[test]
fn test_newest_shadows_older() {
  let a = Company::new("DUP", "Older", 1.0, 1.0, 1999);
  let b = Company::new("DUP", "Newer", 2.0, 2.0, 2009);
  let l = List::<Company>::new().insert(&a).insert(&b);

  assert_eq!(l.fetch("DUP").map(|c| c.name.as_str()), Some("Newer"));
  assert_eq!(l.len(), 2);
}

#[test]
fn test_drop_long_list() {
  let c = util::company("X");
  let mut l = List::<Company>::new();

  for _ in 0 .. 1_000_000 {
    l = l.insert(&c);
  }

  assert_eq!(l.len(), 1_000_000);

  drop(l);
}
