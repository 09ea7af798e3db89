pub const ESCAPE_PREFIX: &str = "\\u";
pub const SEPARATORS_START: char = '\x1c';
pub const SEPARATORS_END: char = '\x1f';
pub const FIRST_PRINTABLE: u8 = b'!';
pub const LAST_PRINTABLE: u8 = b'~';
pub const PRINTABLE_COUNT: usize = (LAST_PRINTABLE - FIRST_PRINTABLE + 1) as usize;
pub const DEFAULT_TABLE_WIDTH: usize = 8;
pub const TABLE_HEADER: &str = "ASII Table";
pub const USAGE: &str = "Use it like this: \n\t- uescape table\n\t- uescape [filename]";
