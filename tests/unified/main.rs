//! unified tests

mod test_hash;
mod test_list;
mod util;
