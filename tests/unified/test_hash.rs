use expect_test::expect;
use std::fmt::Write;
use tickermap::hash::internal;
use tickermap::hash::primary_hash;
use tickermap::hash::secondary_hash;

use crate::util;

#[test]
fn test_known_values() -> Result<(), std::fmt::Error> {
  let mut s = String::new();

  for key in ["A", "B", "C", "D", "AA", "AF", "AE", "AC", "ZNWAA", "ABCDEFG"] {
    writeln!(s, "{:<8} {} {}", key, primary_hash(key, 5), secondary_hash(key, 5))?;
  }

  expect![[r#"
      A        0 0
      B        1 1
      C        2 2
      D        3 3
      AA       0 0
      AF       0 0
      AE       4 4
      AC       2 2
      ZNWAA    0 0
      ABCDEFG  2 1
  "#]].assert_eq(&s);

  Ok(())
}

#[test]
fn test_negative_accumulator() {
  assert_eq!(internal::accumulate("ABCDEFG"), -488_308_668);
  assert_eq!(primary_hash("ABCDEFG", 1000), 332);
  assert_eq!(primary_hash("ABCDEFG", 7), 6);
}

#[test]
fn test_empty_key() {
  assert_eq!(primary_hash("", 9), 0);
  assert_eq!(secondary_hash("", 9), 0);
}

#[test]
fn test_capacity_one() {
  for key in ["A", "ABCDEFG", "ZZZZZZZZZZZZZZZZ"] {
    assert_eq!(primary_hash(key, 1), 0);
    assert_eq!(secondary_hash(key, 1), 0);
  }
}

#[test]
fn test_in_range_and_deterministic() {
  let mut g = util::rng();

  for key in util::symbols(&mut g, 500) {
    let long = key.repeat(7);

    for c in [1, 2, 3, 5, 8, 13, 1000, 1 << 20, usize::MAX] {
      let a = primary_hash(&long, c);
      let b = secondary_hash(&long, c);

      assert!(a < c);
      assert!(b < c);
      assert_eq!(a, primary_hash(&long, c));
      assert_eq!(b, secondary_hash(&long, c));
    }
  }
}
