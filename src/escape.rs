use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::constants::{ESCAPE_PREFIX, SEPARATORS_END, SEPARATORS_START};
use crate::errors::EscapeError;

/// Escapes every non-whitespace character in the file into a `\uXXXX` sequence.
///
/// Lines are transformed in order and concatenated; line endings are whitespace and
/// come through unchanged.
///
/// # Example
/// ```rust,no_run
/// let escaped = uescape::escape_file("notes.txt").unwrap();
/// println!("{}", escaped);
/// ```
/// # Errors
/// - when the file does not exist or cannot be read
/// - when the file is not valid UTF-8
pub fn escape_file<P: AsRef<Path>>(path: P) -> Result<String, EscapeError> {
    let path = path.as_ref();
    let file_access = |source: io::Error| EscapeError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;
    let size_hint = file
        .metadata()
        .map(|m| usize::try_from(m.len()).unwrap_or(0))
        .unwrap_or(0);
    log::debug!("escaping {} ({} bytes)", path.display(), size_hint);

    let mut escaped = String::with_capacity(size_hint);
    let lines = for_each_line(BufReader::new(file), |line| {
        escape_into(line, &mut escaped);
        Ok(())
    })
    .map_err(file_access)?;

    log::debug!("escaped {} lines from {}", lines, path.display());
    Ok(escaped)
}

/// Escapes the text read from `input` line by line, writing each escaped line to `output`
/// as soon as it is read.
///
/// Returns the number of lines processed.
pub fn escape_stream<R, W>(input: R, output: &mut W) -> Result<usize, EscapeError>
where
    R: BufRead,
    W: Write,
{
    let mut escaped = String::new();
    let lines = for_each_line(input, |line| {
        escaped.clear();
        escape_into(line, &mut escaped);
        output.write_all(escaped.as_bytes())
    })?;
    log::trace!("escaped {} lines from stream", lines);
    Ok(lines)
}

/// Escapes a string, see [`escape_char`].
pub fn escape_str(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    escape_into(input, &mut output);
    output
}

/// Appends the escaped form of `c` to `output`.
///
/// Whitespace is copied unchanged. Any other character becomes `\u` followed by its
/// code point in lowercase hex, zero-padded to 4 digits. Code points above `0xFFFF`
/// take as many digits as they need.
///
/// Whitespace is Unicode `White_Space` plus the ASCII file, group, record and unit
/// separators (`0x1C` to `0x1F`).
#[inline]
pub fn escape_char(c: char, output: &mut String) {
    if is_whitespace(c) {
        output.push(c);
    } else {
        output.push_str(ESCAPE_PREFIX);
        // writing to a String cannot fail
        let _ = write!(output, "{:04x}", u32::from(c));
    }
}

#[inline]
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || (SEPARATORS_START..=SEPARATORS_END).contains(&c)
}

fn escape_into(input: &str, output: &mut String) {
    for c in input.chars() {
        escape_char(c, output);
    }
}

/// Calls `f` with every line of `input`, line terminator included.
fn for_each_line<R, F>(mut input: R, mut f: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(&str) -> io::Result<()>,
{
    let mut line = String::new();
    let mut count = 0;
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        f(&line)?;
        count += 1;
    }
    Ok(count)
}
