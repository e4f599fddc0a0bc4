//! Logger identities and the `Loggable` capability
//!
//! An identity is the dotted, fully-qualified name of the owning type, e.g.
//! `billing.invoice.InvoiceService`. Every instance of a type resolves to the
//! same identity, so instances share one logger.

use crate::error::LoggerError;
use crate::logger::Logger;
use crate::registry;
use std::any::type_name;

/// Dotted identity of `T`, derived from its Rust type path
pub fn identity_of<T: ?Sized>() -> String {
    type_name::<T>().replace("::", ".")
}

/// Gives a type access to its own logger from the process-wide registry.
///
/// ```no_run
/// use classlog::Loggable;
///
/// struct Hello;
///
/// impl Loggable for Hello {}
///
/// impl Hello {
///     fn hello(&self, i: i32) -> Result<(), classlog::LoggerError> {
///         self.logger()?.warning(4 + 5 + i);
///         Ok(())
///     }
/// }
/// ```
pub trait Loggable {
    /// Registry key for this type's logger
    fn log_identity(&self) -> String {
        identity_of::<Self>()
    }

    /// This type's logger, created with its sinks on first use
    fn logger(&self) -> Result<Logger, LoggerError> {
        registry::get_logger(&self.log_identity())
    }
}
