use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng, random};
use std::env::temp_dir;
use std::fs::{File, remove_file};
use std::io::{Result, Write};
use std::path::PathBuf;

const WHITESPACE: [char; 7] = [' ', '\t', '\n', '\r', '\x1e', '\u{a0}', '\u{2028}'];

fn passes_through(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn write_temp_file(data: &[u8], name: &str) -> Result<PathBuf> {
    // random suffix, so parallel test cases don't share files
    let mut filepath = temp_dir();
    filepath.push(format!("uescape-{}-{:016x}", name, random::<u64>()));
    let mut f = File::create(&filepath)?;
    f.write_all(data)?;
    Ok(filepath)
}

fn escape_data(data: &[u8], name: &str) -> std::result::Result<String, uescape::EscapeError> {
    let filepath = write_temp_file(data, name).unwrap();
    let result = uescape::escape_file(&filepath);
    remove_file(filepath).unwrap();
    result
}

fn random_text(rng: &mut SmallRng, len: usize) -> String {
    (0..len)
        .map(|_| match rng.random_range(0..4) {
            0 => WHITESPACE[rng.random_range(0..WHITESPACE.len())],
            1 => rng.random_range('!'..='~'),
            _ => rng.random::<char>(),
        })
        .collect()
}

/// Reverses the escaping: every `\u` is followed by hex digits up to the next whitespace or
/// backslash.
fn unescape(escaped: &str) -> String {
    let mut output = String::new();
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            assert!(passes_through(c), "unescaped character {:?}", c);
            output.push(c);
            continue;
        }
        assert_eq!(Some('u'), chars.next());
        let mut hex = String::new();
        while let Some(&d) = chars.peek() {
            if !d.is_ascii_hexdigit() {
                break;
            }
            assert!(!d.is_ascii_uppercase());
            hex.push(d);
            chars.next();
        }
        assert!(hex.len() >= 4);
        let code = u32::from_str_radix(&hex, 16).unwrap();
        output.push(char::from_u32(code).unwrap());
    }
    output
}

#[test]
fn escape_small_file() {
    assert_eq!("\\u0061 \\u0062\n", escape_data(b"a b\n", "small").unwrap());
}

#[test]
fn escape_empty_file() {
    assert_eq!("", escape_data(b"", "empty").unwrap());
}

#[test]
fn escape_without_trailing_newline() {
    assert_eq!(
        "\\u0078\n\t\\u0079",
        escape_data(b"x\n\ty", "no_trailing_newline").unwrap()
    );
}

#[test]
fn escape_crlf_kept() {
    assert_eq!(
        "\\u0031\r\n\\u0032\r\n",
        escape_data(b"1\r\n2\r\n", "crlf").unwrap()
    );
}

#[test]
fn escape_multibyte() {
    let text = "héllo wörld 😀\n";
    assert_eq!(
        "\\u0068\\u00e9\\u006c\\u006c\\u006f \\u0077\\u00f6\\u0072\\u006c\\u0064 \\u1f600\n",
        escape_data(text.as_bytes(), "multibyte").unwrap()
    );
}

#[test]
fn escape_missing_file() {
    let mut filepath = temp_dir();
    filepath.push(format!("uescape-missing-{:016x}", random::<u64>()));
    match uescape::escape_file(&filepath) {
        Err(uescape::EscapeError::FileAccess { path, source }) => {
            assert_eq!(filepath, path);
            assert_eq!(std::io::ErrorKind::NotFound, source.kind());
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn escape_binary_file() {
    match escape_data(&[0x61, 0xc3, 0x28, 0x0a], "binary") {
        Err(uescape::EscapeError::FileAccess { source, .. }) => {
            assert_eq!(std::io::ErrorKind::InvalidData, source.kind());
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn escape_random_text() {
    let mut rng = SmallRng::seed_from_u64(0x75657363);
    for round in 0..20 {
        let text = random_text(&mut rng, 10_000);
        let escaped = escape_data(text.as_bytes(), "random").unwrap();

        assert_eq!(
            text.split('\n').count(),
            escaped.split('\n').count(),
            "round {}",
            round
        );
        assert!(escaped.chars().count() >= text.chars().count());
        assert_eq!(
            text.chars().filter(|&c| passes_through(c)).collect::<String>(),
            escaped.chars().filter(|&c| passes_through(c)).collect::<String>()
        );
        assert_eq!(text, unescape(&escaped));
    }
}

#[test]
fn escape_twice_differs() {
    let once = escape_data(b"ab\n", "once").unwrap();
    let twice = escape_data(once.as_bytes(), "twice").unwrap();
    assert_ne!(once, twice);
    assert_eq!(once, unescape(&twice));
}

#[test]
fn stream_matches_file() {
    let mut rng = SmallRng::seed_from_u64(7);
    let text = random_text(&mut rng, 5_000);
    let mut streamed = Vec::new();
    let lines = uescape::escape_stream(text.as_bytes(), &mut streamed).unwrap();

    assert_eq!(text.split_inclusive('\n').count(), lines);
    assert_eq!(
        escape_data(text.as_bytes(), "stream").unwrap().as_bytes(),
        streamed.as_slice()
    );
}
