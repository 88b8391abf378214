//! `wrangle-table` — Delimited-text parsing and the in-memory table model.
//!
//! Pure transformation crate: raw provider text in, rows/records out, and
//! records back to CSV text. File selection and download plumbing live with
//! the caller.

pub mod model;
pub mod parse;
pub mod read;
pub mod serialize;

pub use model::{Record, Table};
pub use parse::{parse, parse_table, parse_with_delimiter, Delimiter};
pub use read::read_file_as_utf8;
pub use serialize::to_csv;
