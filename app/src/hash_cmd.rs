// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::process::ExitCode;

use spritzcrypt::file_hash;

use crate::arguments::HashArgs;
use crate::digest::{bits_to_bytes, render, DigestFormat};
use crate::error::Error;
use crate::io::DataSource;
use crate::print_error;

const DEFAULT_DIGEST_BITS: u32 = 256;

pub fn run(args: HashArgs) -> ExitCode {
    let format = if args.hex { DigestFormat::Hex } else { DigestFormat::Base64 };
    let nbytes = bits_to_bytes(args.size.unwrap_or(DEFAULT_DIGEST_BITS));

    if args.files.is_empty() {
        return match hash_one(None, nbytes, format) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                print_error!(args, "-: {}", err);
                ExitCode::FAILURE
            }
        };
    }

    let mut failed = false;
    for file in &args.files {
        if let Err(err) = hash_one(Some(file), nbytes, format) {
            print_error!(args, "{}: {}", file.display(), err);
            failed = true;
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn hash_one(path: Option<&std::path::Path>, nbytes: usize, format: DigestFormat) -> Result<(), Error> {
    let label = path.map(|p| p.to_string_lossy().into_owned()).unwrap_or_else(|| "-".to_owned());
    let source = DataSource::from_path_or_stdin(path)?;
    let digest = file_hash(source, nbytes)?;
    println!("{label}: {}", render(&digest, format));
    Ok(())
}
