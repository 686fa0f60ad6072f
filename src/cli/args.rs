//! Command-line argument parsing and validation

use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const EXAMPLES: &str = "\
Examples:
  clipboard add mykey \"Hello World\"
  clipboard retrieve mykey
  clipboard copy mykey";

/// Clipboard - keep named snippets and copy them to the OS clipboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "clipboard", after_help = EXAMPLES, disable_help_subcommand = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Store file to use instead of ./clipboard.json
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
///
/// Positionals are optional here so the dispatcher can report missing
/// arguments itself. Options are only recognised before the verb; after it,
/// every token is a key or value, including ones that look like flags.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Store a value with the given key
    #[command(disable_help_flag = true)]
    Add {
        /// Key to store the value under
        #[arg(allow_hyphen_values = true)]
        key: Option<String>,

        /// Value to store; multiple words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Retrieve and display the value
    #[command(disable_help_flag = true)]
    Retrieve {
        /// Key to look up
        #[arg(allow_hyphen_values = true)]
        key: Option<String>,
    },

    /// Retrieve value and copy to OS clipboard
    #[command(disable_help_flag = true)]
    Copy {
        /// Key to look up
        #[arg(allow_hyphen_values = true)]
        key: Option<String>,
    },

    /// List all stored keys
    List,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Parse command line arguments
pub fn parse_args() -> Result<Args, clap::Error> {
    parse_from(std::env::args_os())
}

/// Parse an explicit argument vector, matching the verb case-insensitively
pub fn parse_from<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    normalize_verb(&mut argv);
    Args::try_parse_from(argv)
}

/// Full help text, printed whenever the invocation is unusable
#[must_use]
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Print a parse failure and pick the exit code.
///
/// Help and version requests succeed unless printing them fails; anything
/// else shows the first line of
/// clap's message followed by the usage text.
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => match err.print() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        _ => {
            let message = err.to_string();
            println!("{}", message.lines().next().unwrap_or_default());
            print!("{}", usage());
            ExitCode::FAILURE
        }
    }
}

// Lowercase the first non-option token if it names a known subcommand.
fn normalize_verb(argv: &mut [OsString]) {
    let cmd = Args::command();
    let mut skip_value = false;

    for token in argv.iter_mut().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }
        let Some(text) = token.to_str() else {
            return;
        };
        if text == "--store" {
            skip_value = true;
            continue;
        }
        if text.starts_with('-') {
            continue;
        }

        let lower = text.to_lowercase();
        if cmd.find_subcommand(&lower).is_some() {
            *token = OsString::from(lower);
        }
        return;
    }
}
