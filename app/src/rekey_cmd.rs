// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::fs::OpenOptions;
use std::process::ExitCode;

use crate::arguments::RekeyArgs;
use crate::error::Error;
use crate::password::{collect_confirmed, collect_single};
use crate::print_error;
use crate::random::OsRandom;

pub fn run(args: RekeyArgs) -> ExitCode {
    let old_pw_hash = match collect_single(args.old_password.as_deref(), "Current password: ") {
        Ok(pw) => pw,
        Err(err) => {
            print_error!(args, "{}", err);
            return ExitCode::FAILURE;
        }
    };
    let new_pw_hash = match collect_confirmed(args.new_password.as_deref(), "New password: ", "Confirm new password: ") {
        Ok(pw) => pw,
        Err(err) => {
            print_error!(args, "{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for path in &args.files {
        if let Err(err) = rekey_one(path, &old_pw_hash, &new_pw_hash) {
            print_error!(args, "{}: {}", path.display(), err);
            failed = true;
        } else {
            println!("{}: rekeyed", path.display());
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn rekey_one(path: &std::path::Path, old_pw_hash: &[u8; 64], new_pw_hash: &[u8; 64]) -> Result<(), Error> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let mut rnd = OsRandom::new();
    spritzcrypt::rekey(&mut file, old_pw_hash, new_pw_hash, &mut rnd)?;
    Ok(())
}
