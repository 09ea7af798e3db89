use std::env::args_os;
use std::ffi::OsString;
use std::io;
use std::iter::once;
use std::process::exit;

use clap::Parser;
use uescape::Command;

/// Escapes a text file into \u code point sequences, or prints an ASCII hex table.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// `table`, `help`/`-h`, or the file to escape
    #[arg(allow_hyphen_values = true)]
    target: Option<OsString>,

    /// Ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<OsString>,
}

fn main() {
    env_logger::init();
    // a leading `--` makes every user argument positional, a later `--` or `-h` included
    let argv = args_os()
        .take(1)
        .chain(once(OsString::from("--")))
        .chain(args_os().skip(1));
    let args = Args::parse_from(argv);
    if !args.rest.is_empty() {
        log::debug!("ignoring extra arguments {:?}", args.rest);
    }

    let command = Command::from_arg(args.target.as_deref());
    let result = {
        let mut stdout = io::stdout().lock();
        command.run(&mut stdout)
    };

    exit(match result {
        Err(err) => {
            println!("Error: {}", err);
            1
        }
        Ok(()) => 0,
    });
}
