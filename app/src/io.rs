// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::fs::File;
use std::io::{stdin, stdout, Error as IoError, Read, Result as IoResult, Stdin, StdinLock, Stdout, Write};
use std::path::Path;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// The conventional "this is stdin/stdout, not a real path" argument.
pub const STDIO_SENTINEL: &str = "-";

static STDIN_HANDLE: LazyLock<Stdin> = LazyLock::new(stdin);
static STDOUT_HANDLE: LazyLock<Stdout> = LazyLock::new(stdout);

static STDIN_MUTEX: Mutex<()> = Mutex::new(());
static STDOUT_MUTEX: Mutex<()> = Mutex::new(());

/// A readable file, or an exclusively-locked handle to stdin.
pub enum DataSource<'a> {
    File(File),
    Stream((MutexGuard<'a, ()>, StdinLock<'a>)),
}

impl DataSource<'_> {
    /// Locks stdin for the duration of this `DataSource`'s lifetime.
    pub fn from_stdin() -> Result<Self, IoError> {
        match STDIN_MUTEX.try_lock() {
            Ok(guard) => Ok(DataSource::Stream((guard, STDIN_HANDLE.lock()))),
            Err(_) => Err(IoError::other("stdin is already in use")),
        }
    }

    /// Opens `path` for reading, or locks stdin if `path` is [`STDIO_SENTINEL`].
    pub fn from_path_or_stdin<P: AsRef<Path>>(path: Option<P>) -> Result<Self, IoError> {
        match path {
            None => Self::from_stdin(),
            Some(p) if p.as_ref() == Path::new(STDIO_SENTINEL) => Self::from_stdin(),
            Some(p) => Ok(DataSource::File(File::open(p)?)),
        }
    }
}

impl Read for DataSource<'_> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        let reader: &mut dyn Read = match self {
            DataSource::File(file) => file,
            DataSource::Stream(stream) => &mut stream.1,
        };
        reader.read(buf)
    }
}

/// A writable file, or an exclusively-locked handle to stdout.
pub enum DataSink<'a> {
    File(File),
    Stream((MutexGuard<'a, ()>, std::io::StdoutLock<'a>)),
}

impl DataSink<'_> {
    /// Locks stdout for the duration of this `DataSink`'s lifetime.
    pub fn from_stdout() -> Result<Self, IoError> {
        match STDOUT_MUTEX.try_lock() {
            Ok(guard) => Ok(DataSink::Stream((guard, STDOUT_HANDLE.lock()))),
            Err(_) => Err(IoError::other("stdout is already in use")),
        }
    }

    /// Creates (truncating) `path` for writing, or locks stdout if `path` is [`STDIO_SENTINEL`].
    pub fn from_path_or_stdout<P: AsRef<Path>>(path: Option<P>) -> Result<Self, IoError> {
        match path {
            None => Self::from_stdout(),
            Some(p) if p.as_ref() == Path::new(STDIO_SENTINEL) => Self::from_stdout(),
            Some(p) => Ok(DataSink::File(File::create(p)?)),
        }
    }
}

impl Write for DataSink<'_> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        let writer: &mut dyn Write = match self {
            DataSink::File(file) => file,
            DataSink::Stream(stream) => &mut stream.1,
        };
        writer.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> IoResult<()> {
        let writer: &mut dyn Write = match self {
            DataSink::File(file) => file,
            DataSink::Stream(stream) => &mut stream.1,
        };
        writer.flush()
    }
}
