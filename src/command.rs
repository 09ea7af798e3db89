use std::ffi::OsStr;
use std::io::Write;
use std::path::PathBuf;

use crate::constants::USAGE;
use crate::errors::CommandError;
use crate::escape::escape_file;
use crate::table::TableOptions;

/// A command selected from the first command line argument.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the usage text.
    Help,
    /// Print the ASCII table with the default width.
    Table,
    /// Print the escaped contents of a file.
    EscapeFile(PathBuf),
}

impl Command {
    /// Selects the command for the first argument. No argument, `-h` and `help` select
    /// `Help`, `table` selects `Table`, and anything else is taken as a file path,
    /// including `--` and names that are not valid UTF-8.
    pub fn from_arg(arg: Option<&OsStr>) -> Command {
        match arg {
            None => Command::Help,
            Some(arg) if arg == "-h" || arg == "help" => Command::Help,
            Some(arg) if arg == "table" => Command::Table,
            Some(path) => Command::EscapeFile(PathBuf::from(path)),
        }
    }

    /// Runs the command, writing its result to `output`.
    pub fn run<W>(&self, output: &mut W) -> Result<(), CommandError>
    where
        W: Write,
    {
        log::debug!("running {:?}", self);
        match *self {
            Command::Help => writeln!(output, "{}", USAGE)?,
            Command::Table => TableOptions::default().write_table(output)?,
            Command::EscapeFile(ref path) => {
                let escaped = escape_file(path)?;
                writeln!(output, "{}", escaped)?;
            }
        }
        Ok(())
    }
}
