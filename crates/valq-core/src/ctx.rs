//! Execution context threaded through every operation.
//!
//! The context carries the cancellation flag shared with the caller's
//! accessor engine. Recursive or combinatorially expensive operations call
//! [`Ctx::checkpoint`] between steps so that a canceled computation aborts
//! promptly instead of materializing further output.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Cancellation state for a single logical computation.
///
/// Cloning is cheap; clones observe the same flag. The default context is
/// never canceled.
#[derive(Debug, Clone, Default)]
pub struct Ctx {
    cancel: Option<Arc<AtomicBool>>,
}

impl Ctx {
    /// A context that can never be canceled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context observing the given shared flag. Setting the flag to `true`
    /// cancels every operation still running under this context.
    pub fn with_cancel(flag: Arc<AtomicBool>) -> Self {
        Self { cancel: Some(flag) }
    }

    pub fn is_canceled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Report [`Error::Canceled`] once the flag is set.
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_canceled() {
            Err(Error::Canceled)
        } else {
            Ok(())
        }
    }
}
