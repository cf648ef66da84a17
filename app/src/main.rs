// SPDX-License-Identifier: 0BSD
// spritzcrypt

//! # spritzcrypt
//!
//! A command-line tool for password-based file encryption and hashing, built on the
//! [spritzcrypt](../spritzcrypt/index.html) library's Spritz sponge construction.
//!
//! ## Usage
//!
//! ```plaintext
//! Usage: spritzcrypt hash [-h] [-s bits] [-q] [file1 file2 ...]
//!        spritzcrypt crypt [-d | -n] [-p password] [-q] [file]
//!        spritzcrypt rekey [-o oldpassword] [-n newpassword] [-q] file1 file2 ...
//! ```
//!
//! Each subcommand reads stdin and/or writes stdout when no file (or `-`) is given.
//!
//! ## License
//!
//! Copyright (C) 2026. Permission to use, copy, modify, and/or distribute this software for any
//! purpose with or without fee is hereby granted.
//!
//! THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES WITH REGARD TO THIS
//! SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE
//! AUTHOR BE LIABLE FOR ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
//! WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION OF CONTRACT,
//! NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN CONNECTION WITH THE USE OR PERFORMANCE
//! OF THIS SOFTWARE.

mod arguments;
mod crypt_cmd;
mod digest;
mod error;
mod hash_cmd;
mod io;
mod naming;
mod password;
mod random;
mod rekey_cmd;

use std::ffi::OsString;
use std::process::ExitCode;

use arguments::{CryptArgs, HashArgs, RekeyArgs};

const USAGE: &str = "\
Usage: spritzcrypt hash [-h] [-s bits] [-q] [file1 file2 ...]
       spritzcrypt crypt [-d | -n] [-p password] [-q] [file]
       spritzcrypt rekey [-o oldpassword] [-n newpassword] [-q] file1 file2 ...
";

fn main() -> ExitCode {
    #[cfg(feature = "with-logging")]
    simple_logger::SimpleLogger::new().init().ok();

    // argv[0] is the program name, argv[1] (if any) is the subcommand; everything after that
    // is forwarded to the subcommand's own parser together with a synthetic program name, so
    // clap's own usage/help text names the subcommand rather than the top-level binary.
    let mut argv: Vec<OsString> = wild::args_os().collect();
    if argv.len() < 2 {
        eprint!("{USAGE}");
        return ExitCode::FAILURE;
    }
    let cmd = argv.remove(1);

    match cmd.to_str() {
        Some("hash") => match HashArgs::try_parse_command_line(argv) {
            Ok(args) => hash_cmd::run(args),
            Err(code) => code,
        },
        Some("crypt") => match CryptArgs::try_parse_command_line(argv) {
            Ok(args) => crypt_cmd::run(args),
            Err(code) => code,
        },
        Some("rekey") => match RekeyArgs::try_parse_command_line(argv) {
            Ok(args) => rekey_cmd::run(args),
            Err(code) => code,
        },
        _ => {
            eprint!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
