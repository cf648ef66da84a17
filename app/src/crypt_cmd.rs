// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::process::ExitCode;

use crate::arguments::CryptArgs;
use crate::error::Error;
use crate::io::{DataSink, DataSource};
use crate::naming::determine_target;
use crate::password::{collect_confirmed, collect_single};
use crate::print_error;
use crate::random::OsRandom;

pub fn run(args: CryptArgs) -> ExitCode {
    match run_inner(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error!(args, "{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_inner(args: &CryptArgs) -> Result<(), Error> {
    if args.check {
        let pw_hash = collect_single(args.password.as_deref(), "Password: ")?;
        let source = DataSource::from_path_or_stdin(args.file.as_ref())?;
        spritzcrypt::check(source, &pw_hash)?;
        println!("OK");
        return Ok(());
    }

    if args.decrypt {
        let pw_hash = collect_single(args.password.as_deref(), "Password: ")?;
        let source = DataSource::from_path_or_stdin(args.file.as_ref())?;
        let target = args.file.as_ref().map(|src| determine_target(false, src));
        let sink = DataSink::from_path_or_stdout(target.as_ref())?;
        spritzcrypt::decrypt(source, sink, &pw_hash)?;
        report(args.file.as_deref(), target.as_deref(), "decrypted");
        return Ok(());
    }

    let pw_hash = collect_confirmed(args.password.as_deref(), "Password: ", "Confirm password: ")?;
    let source = DataSource::from_path_or_stdin(args.file.as_ref())?;
    let target = args.file.as_ref().map(|src| determine_target(true, src));
    let sink = DataSink::from_path_or_stdout(target.as_ref())?;
    let mut rnd = OsRandom::new();
    spritzcrypt::encrypt(source, sink, &pw_hash, &mut rnd)?;
    report(args.file.as_deref(), target.as_deref(), "encrypted");
    Ok(())
}

/// Prints the `src -verb-> tgt` status line, unless `tgt` is `None` — which means the output
/// sink is stdout, and a status line would just pollute the stream being written to.
fn report(src: Option<&std::path::Path>, tgt: Option<&std::path::Path>, verb: &str) {
    let Some(tgt) = tgt else { return };
    let src_label = src.map(|p| p.to_string_lossy().into_owned()).unwrap_or_else(|| "-".to_owned());
    println!("{src_label} -{verb}-> {}", tgt.display());
}
