//! Escapes text into `\u` code point sequences and prints a reference table of the
//! printable ASCII characters.
//!
//! Every character that is not whitespace is replaced by `\u` and its code point in
//! lowercase hex, zero-padded to 4 digits. Whitespace, line endings included, is kept
//! as is.
//!
//! ```rust
//! assert_eq!("\\u0061 \\u0062\n", uescape::escape_str("a b\n"));
//! ```
//!
//! The table lists `!` through `~` as ` HHHH|c ` cells, 8 to a row by default.
//!
//! ```rust
//! let rows = uescape::TableOptions::new().rows().unwrap();
//! assert_eq!(12, rows.len());
//! ```

mod command;
mod constants;
mod errors;
mod escape;
mod table;

pub use command::Command;
pub use constants::{DEFAULT_TABLE_WIDTH, TABLE_HEADER, USAGE};
pub use errors::{CommandError, EscapeError, TableError};
pub use escape::{escape_char, escape_file, escape_str, escape_stream};
pub use table::{TableOptions, table_cell};
