
///
/// Re-exports of the error-handling surface used across the workspace.
///
/// Fallible functions return `Result` and attach human-readable context
/// strings via `Context`; ad-hoc failures are built with the `error!` macro.
/// Typed error enums (via `thiserror`) convert into `Error` through `?`.
///
pub use anyhow::{Context, Error, Result};

#[macro_export]
#[doc(hidden)]
///
/// Builds an ad-hoc `Error` from a format string and arguments.
///
macro_rules! __error
{
    ($($args:tt)*) =>
    {
        $crate::error::Error::msg(format!($($args)*))
    };
}

pub use crate::__error as error;
