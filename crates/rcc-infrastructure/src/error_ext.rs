//! Context helpers for foreign errors
//!
//! Each method prefixes the message and keeps the original error as the
//! source. The method name picks the domain variant.
//!
//! ```ignore
//! use rcc_infrastructure::ErrorContext;
//!
//! let raw = std::fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read {}", path.display()))?;
//! ```

use std::fmt::Display;

use rcc_domain::error::{Error, Result};

type Wrap<E> = fn(String, E) -> Error;

/// Converts `Result<T, E>` into the domain `Result<T>`
pub trait ErrorContext<T> {
    /// Wrap as `Error::Infrastructure`
    fn context(self, context: impl Display) -> Result<T>;

    /// Like [`ErrorContext::context`], building the message only on failure
    fn with_context<C: Display>(self, context: impl FnOnce() -> C) -> Result<T>;

    /// Wrap as `Error::Configuration`
    fn config_context(self, context: impl Display) -> Result<T>;
}

fn wrap<T, E: Display>(
    result: std::result::Result<T, E>,
    context: impl Display,
    to: Wrap<E>,
) -> Result<T> {
    result.map_err(|err| to(format!("{context}: {err}"), err))
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Display) -> Result<T> {
        wrap(self, context, Error::infrastructure_with_source)
    }

    fn with_context<C: Display>(self, context: impl FnOnce() -> C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => wrap(Err(err), context(), Error::infrastructure_with_source),
        }
    }

    fn config_context(self, context: impl Display) -> Result<T> {
        wrap(self, context, Error::configuration_with_source)
    }
}
