use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tickermap::record::Company;

pub(crate) fn rng() -> StdRng {
  return StdRng::seed_from_u64(0);
}

pub(crate) fn company(symbol: &str) -> Company {
  return Company::new(symbol, format!("{} Corp.", symbol), 1.0, 1000.0, 2000);
}

/// `n` distinct upper-case symbols of one to five letters.

pub(crate) fn symbols(g: &mut impl Rng, n: usize) -> Vec<String> {
  let mut seen = std::collections::HashSet::new();
  let mut out = Vec::with_capacity(n);

  while out.len() < n {
    let len = g.random_range(1 ..= 5);
    let s: String = (0 .. len).map(|_| g.random_range(b'A' ..= b'Z') as char).collect();
    if seen.insert(s.clone()) { out.push(s); }
  }

  return out;
}
