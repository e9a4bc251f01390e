#![doc = include_str!("../README.md")]

pub mod error;
pub mod hash;
pub mod list;
pub mod load;
pub mod record;
pub mod table;

pub use error::Error;
