// SPDX-License-Identifier: 0BSD
// spritzcrypt

use build_time::build_time_utc;
use clap::{
    error::{ContextKind, ContextValue, Error, ErrorKind},
    Parser,
};
use const_format::formatcp;
use rustc_version_const::rustc_version_full;
use std::{
    env::consts::{ARCH, OS},
    ffi::OsString,
    path::PathBuf,
    process::ExitCode,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const BUILD_PROFILE: &str = if cfg!(debug_assertions) { "debug" } else { "release" };

/// Version string
pub const VERSION: &str = formatcp!("v{} [{OS}] [{ARCH}] [{BUILD_PROFILE}]", env!("CARGO_PKG_VERSION"));

/// Full version string
pub const LONG_VERSION: &str =
    formatcp!("{VERSION}\nBuilt on: {}\nCompiled using rustc version: {}", build_time_utc!("%F, %T"), rustc_version_full());

const ABOUT_TEXT: &str = "A password-based file encryption and hashing toolkit built on the Spritz sponge construction.\n\
    This software is released under the Zero-Clause BSD License.";

const HELP_TEXT: &str = "For details on a specific command, run: spritzcrypt <hash|crypt|rekey> --help";

// ---------------------------------------------------------------------------
// hash
// ---------------------------------------------------------------------------

/// Computes a Spritz hash of one or more files, or of stdin
///
/// `-h` is reserved for the documented `--hex` flag here, not for help; use `--help` instead.
#[derive(Parser, Debug, Clone)]
#[command(name = "hash")]
#[command(about = ABOUT_TEXT)]
#[command(after_help = HELP_TEXT)]
#[command(long_version = LONG_VERSION)]
#[command(version = VERSION)]
#[command(disable_help_flag = true)]
pub struct HashArgs {
    /// Print the digest in hexadecimal instead of base64
    #[arg(short = 'h', long = "hex")]
    pub hex: bool,

    /// Digest size, in bits (rounded up to whole bytes, default: 256)
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Do not print error messages to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Print help information
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,

    /// Files to hash; reads stdin if none are given
    #[arg()]
    pub files: Vec<PathBuf>,
}

impl HashArgs {
    pub fn try_parse_command_line<I: IntoIterator<Item = OsString>>(argv: I) -> Result<Self, ExitCode> {
        match Self::try_parse_from(argv) {
            Ok(args) => Ok(args),
            Err(error) => Err(print_arg_error(error)),
        }
    }
}

// ---------------------------------------------------------------------------
// crypt
// ---------------------------------------------------------------------------

/// Encrypts, decrypts, or checks a single file against a password
#[derive(Parser, Debug, Clone)]
#[command(name = "crypt")]
#[command(about = ABOUT_TEXT)]
#[command(after_help = HELP_TEXT)]
#[command(long_version = LONG_VERSION)]
#[command(version = VERSION)]
pub struct CryptArgs {
    /// Decrypt the input instead of encrypting it
    #[arg(short, long, group = "mode")]
    pub decrypt: bool,

    /// Check that the password opens the input, without writing any output
    #[arg(short = 'n', long, group = "mode")]
    pub check: bool,

    /// Supply the password directly instead of prompting on the terminal
    #[arg(short, long)]
    pub password: Option<String>,

    /// Do not print error messages to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// File to process; reads stdin / writes stdout if omitted or "-"
    #[arg()]
    pub file: Option<PathBuf>,
}

impl CryptArgs {
    pub fn try_parse_command_line<I: IntoIterator<Item = OsString>>(argv: I) -> Result<Self, ExitCode> {
        match Self::try_parse_from(argv) {
            Ok(args) => Ok(args),
            Err(error) => Err(print_arg_error(error)),
        }
    }
}

// ---------------------------------------------------------------------------
// rekey
// ---------------------------------------------------------------------------

/// Re-encrypts one or more files' headers under a new password, in place
#[derive(Parser, Debug, Clone)]
#[command(name = "rekey")]
#[command(about = ABOUT_TEXT)]
#[command(after_help = HELP_TEXT)]
#[command(long_version = LONG_VERSION)]
#[command(version = VERSION)]
pub struct RekeyArgs {
    /// Supply the current password directly instead of prompting
    #[arg(short, long)]
    pub old_password: Option<String>,

    /// Supply the new password directly instead of prompting (twice, with confirmation)
    #[arg(short, long)]
    pub new_password: Option<String>,

    /// Do not print error messages to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Files to rekey
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl RekeyArgs {
    pub fn try_parse_command_line<I: IntoIterator<Item = OsString>>(argv: I) -> Result<Self, ExitCode> {
        match Self::try_parse_from(argv) {
            Ok(args) => Ok(args),
            Err(error) => Err(print_arg_error(error)),
        }
    }
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

macro_rules! print_arg_error {
    ($fmt:literal $(,$arg:expr)*$(,)?) => {
        eprintln!(concat!("[spritzcrypt] Error: ", $fmt) $(, $arg)*)
    };
}

#[inline]
fn context_str(error: &Error, kind: ContextKind) -> &str {
    static EMPTY_STRING: String = String::new();
    if let Some(ContextValue::String(str_value)) = error.get(kind) {
        str_value
    } else {
        &EMPTY_STRING
    }
}

/// Prints a `clap` parse error in the tool's own diagnostic style and maps it to an exit code
fn print_arg_error(error: Error) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            eprint!("{}", error);
            ExitCode::SUCCESS
        }
        ErrorKind::UnknownArgument => {
            print_arg_error!("Unknown option \"{}\" encountered!", context_str(&error, ContextKind::InvalidArg));
            ExitCode::FAILURE
        }
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            let (invalid_arg, invalid_value) = (context_str(&error, ContextKind::InvalidArg), context_str(&error, ContextKind::InvalidValue));
            if invalid_value.is_empty() {
                print_arg_error!("The required value for option \"{}\" is missing!", invalid_arg);
            } else {
                print_arg_error!("The given value \"{}\" for option \"{}\" is invalid!", invalid_value, invalid_arg);
            }
            ExitCode::FAILURE
        }
        ErrorKind::ArgumentConflict => {
            let (invalid_arg, prior_arg) = (context_str(&error, ContextKind::InvalidArg), context_str(&error, ContextKind::PriorArg));
            if prior_arg.is_empty() || (prior_arg == invalid_arg) {
                print_arg_error!("The option \"{}\" can not be used more than once!", invalid_arg);
            } else {
                print_arg_error!("The options \"{}\" and \"{}\" are mutually exclusive!", invalid_arg, prior_arg);
            }
            ExitCode::FAILURE
        }
        ErrorKind::MissingRequiredArgument => {
            print_arg_error!("A required argument is missing: {}", context_str(&error, ContextKind::InvalidArg));
            ExitCode::FAILURE
        }
        other => {
            print_arg_error!("Invalid command-line arguments! ({:?})", other);
            ExitCode::FAILURE
        }
    }
}
