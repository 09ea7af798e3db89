use std::io::Write;

use crate::constants::{
    DEFAULT_TABLE_WIDTH, FIRST_PRINTABLE, LAST_PRINTABLE, PRINTABLE_COUNT, TABLE_HEADER,
};
use crate::errors::TableError;

/// Options for printing the ASCII table
#[derive(Debug)]
pub struct TableOptions {
    width: usize,
}

impl Default for TableOptions {
    /// Constructs a new TableOptions instance, with 8 cells per row.
    fn default() -> Self {
        TableOptions {
            width: DEFAULT_TABLE_WIDTH,
        }
    }
}

impl TableOptions {
    /// Same as `TableOptions::default()`.
    pub fn new() -> TableOptions {
        Default::default()
    }

    /// Sets the number of cells per row (default=8).
    /// A width of 0 is rejected when the table is built.
    pub fn width(mut self, width: usize) -> TableOptions {
        self.width = width;
        self
    }

    /// Builds the rows of the table, `!` through `~` in ascending order.
    ///
    /// Every row holds `width` cells, except the last one which may hold fewer.
    ///
    /// # Errors
    /// - when the width is 0
    pub fn rows(&self) -> Result<Vec<String>, TableError> {
        if self.width == 0 {
            return Err(TableError::InvalidWidth(self.width));
        }
        log::debug!("building ASCII table with {} cells per row", self.width);

        let mut cells = Vec::<String>::with_capacity(PRINTABLE_COUNT);
        cells.extend((FIRST_PRINTABLE..=LAST_PRINTABLE).map(table_cell));
        Ok(cells.chunks(self.width).map(|row| row.concat()).collect())
    }

    /// Writes the header line followed by one line per row.
    /// # Example
    /// ```rust
    /// let mut output = Vec::new();
    /// uescape::TableOptions::new().width(16).write_table(&mut output).unwrap();
    /// assert!(output.starts_with(b"ASII Table\n 0021|! "));
    /// ```
    pub fn write_table<W>(&self, output: &mut W) -> Result<(), TableError>
    where
        W: Write,
    {
        let rows = self.rows()?;
        writeln!(output, "{}", TABLE_HEADER)?;
        for row in rows {
            writeln!(output, "{}", row)?;
        }
        Ok(())
    }
}

/// Formats one table cell: a space, the 4-digit uppercase hex code, `|`, the glyph and a
/// trailing space.
pub fn table_cell(code: u8) -> String {
    format!(" {:04X}|{} ", code, char::from(code))
}
