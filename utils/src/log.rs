
use flexi_logger::{with_thread, Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};

use super::error::*;

///
/// Macros to write to the backing file logger.
///
pub use ::log::{trace as trace, debug as debug, info as info, warn as warn, error as error};

///
/// Initializes the logstream to write to the given file; warnings and errors
/// are additionally duplicated to stderr so they are visible at the console.
///
/// The returned handle must be held for the lifetime of the program, or the
/// buffered writer is dropped and flushed early.
///
pub fn initialize (path: & str, filename: & str) -> Result<LoggerHandle>
{
    let file_spec = FileSpec::default()
        .directory(path)
        .basename(filename)
        .use_timestamp(true)
        .suffix("log");

    let handle = Logger::try_with_str("info")?
        .log_to_file(file_spec)
        .duplicate_to_stderr(Duplicate::Warn)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(with_thread)
        .start()?;

    Ok(handle)
}
