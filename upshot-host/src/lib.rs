//! Host-environment interop for the outcome container
//!
//! Adapts [`Outcome`] to a Foundation-style error-reporting convention: an
//! error record carrying a message and file/line provenance ([`HostError`]),
//! default failures that capture their call site, and constructors wrapping
//! legacy out-error-pointer callbacks.

#![warn(missing_docs)]

pub mod error;

use std::panic::Location;

pub use error::HostError;
pub use upshot_core::Outcome;

/// Outcome fixed to the host error type
pub type HostOutcome<T> = Outcome<T, HostError>;

/// A failed outcome carrying a synthesized error located at the call site
///
/// Lets a failure be written without constructing an error value. The success
/// type usually needs an annotation:
///
/// ```
/// use upshot_host::{failure, HostOutcome};
///
/// let fail: HostOutcome<i32> = failure();
/// assert!(!fail.is_success());
/// ```
#[track_caller]
pub fn failure<T>() -> HostOutcome<T> {
    Outcome::failure(HostError::unspecified())
}

/// A failed outcome carrying `message` plus the call site
#[track_caller]
pub fn failure_with<T>(message: impl Into<String>) -> HostOutcome<T> {
    Outcome::failure(HostError::new(message))
}

/// Adapt a callback that reports failure through an out-parameter error slot
///
/// The callback receives a mutable error slot and returns the value it
/// produced, or `None`. A produced value always wins: the result is a success
/// even when the slot was also populated, in which case the stray error is
/// logged at debug level and dropped. A `None` return is a failure carrying
/// the populated slot, or a synthesized default error located at this call
/// site when the slot was left empty.
#[track_caller]
pub fn attempt<T, F>(f: F) -> HostOutcome<T>
where
    F: FnOnce(&mut Option<HostError>) -> Option<T>,
{
    let caller = Location::caller();
    let mut slot: Option<HostError> = None;
    match f(&mut slot) {
        Some(value) => {
            if let Some(stray) = slot {
                log::debug!("discarding error set alongside a produced value: {}", stray);
            }
            Outcome::success(value)
        }
        None => Outcome::failure(
            slot.unwrap_or_else(|| HostError::located(None, caller.file(), caller.line())),
        ),
    }
}

/// Boolean form of [`attempt`]
///
/// `true` means success with a unit value; the slot rules are the same,
/// including a populated slot losing to a `true` return.
#[track_caller]
pub fn attempt_flag<F>(f: F) -> HostOutcome<()>
where
    F: FnOnce(&mut Option<HostError>) -> bool,
{
    let caller = Location::caller();
    let mut slot: Option<HostError> = None;
    if f(&mut slot) {
        if let Some(stray) = slot {
            log::debug!("discarding error set alongside a success flag: {}", stray);
        }
        Outcome::success(())
    } else {
        Outcome::failure(
            slot.unwrap_or_else(|| HostError::located(None, caller.file(), caller.line())),
        )
    }
}
