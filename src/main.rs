//! Loads a company listing into a double-hashing table and a linked list,
//! then reports how long each structure takes to store and fetch.

use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use std::time::Instant;
use tickermap::list::List;
use tickermap::load;
use tickermap::record::Company;
use tickermap::record::Lookup;
use tickermap::table::HashTable;
use tickermap::table::Policy;
use tracing::Level;
use tracing::error;
use tracing::info;

const DEFAULT_SYMBOLS: [&str; 11] = [
  "ZNWAA", "Z", "ZIOP", "ZIOQ", "YIOQ", "QIOQ", "WIOQ", "XIOQ", "TIOQ", "UIOQ", "VIOQ",
];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Company listing to load.
  listing: PathBuf,

  /// Symbols to fetch after loading. Defaults to a fixed sample.
  symbols: Vec<String>,

  /// Table capacity as a multiple of the number of companies.
  #[arg(short, long, default_value_t = 2)]
  factor: usize,

  /// What the table does when a home slot is taken.
  #[arg(short, long, value_enum, default_value_t = PolicyArg::OneShot)]
  policy: PolicyArg,

  /// Raise the log level. Repeat for more detail.
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
  OneShot,
  Exhaustive,
}

impl From<PolicyArg> for Policy {
  fn from(p: PolicyArg) -> Self {
    return match p {
      PolicyArg::OneShot => Policy::OneShot,
      PolicyArg::Exhaustive => Policy::Exhaustive,
    };
  }
}

struct Timings {
  table_store: Duration,
  table_fetch: Duration,
  list_store: Duration,
  list_fetch: Duration,
}

fn main() -> ExitCode {
  let args = Args::parse();

  let level = match args.verbose {
    0 => Level::WARN,
    1 => Level::INFO,
    2 => Level::DEBUG,
    _ => Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .init();

  return match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{}", e);
      ExitCode::FAILURE
    }
  };
}

fn run(args: &Args) -> Result<(), tickermap::Error> {
  let companies = load::read(&args.listing)?;

  info!(count = companies.len(), "loaded companies");

  let symbols: Vec<&str> =
    if args.symbols.is_empty() {
      DEFAULT_SYMBOLS.to_vec()
    } else {
      args.symbols.iter().map(String::as_str).collect()
    };

  let capacity = companies.len().saturating_mul(args.factor);
  let mut table = HashTable::<Company>::with_policy(capacity, args.policy.into())?;

  let start = Instant::now();
  for c in companies.iter() {
    let _: usize = table.store(c)?;
  }
  let table_store = start.elapsed();
  println!("Store for hash map executing, took {:.6}", table_store.as_secs_f64());

  let start = Instant::now();
  for &key in symbols.iter() {
    println!("{}", Lookup { key, found: table.fetch(key) });
  }
  let table_fetch = start.elapsed();
  println!("Fetch for hash map executing, took {:.6}", table_fetch.as_secs_f64());

  let start = Instant::now();
  let mut list = List::new();
  for c in companies.iter() {
    list = list.insert(c);
  }
  let list_store = start.elapsed();
  println!("Store for linked lists executing, took {:.6}", list_store.as_secs_f64());

  let start = Instant::now();
  for &key in symbols.iter() {
    println!("{}", Lookup { key, found: list.fetch(key) });
  }
  let list_fetch = start.elapsed();
  println!("Fetch for linked lists executing, took {:.6}", list_fetch.as_secs_f64());

  let timings = Timings { table_store, table_fetch, list_store, list_fetch };

  summarize(&companies, &table, &list, &timings);

  return Ok(());
}

fn summarize(companies: &[Company], table: &HashTable<Company>, list: &List<'_, Company>, t: &Timings) {
  let lost = companies.iter().filter(|c| !table.contains_key(&c.symbol)).count();

  println!();
  println!("{:<20}{}", "companies", companies.len());
  println!("{:<20}{}", "table capacity", table.capacity());
  println!("{:<20}{}", "table occupied", table.len());
  println!("{:<20}{}", "table unreachable", lost);
  println!("{:<20}{}", "list nodes", list.len());
  println!("{:<20}{:?} / {:?}", "table store/fetch", t.table_store, t.table_fetch);
  println!("{:<20}{:?} / {:?}", "list store/fetch", t.list_store, t.list_fetch);
}
