use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Checked by the generator and the scan loop between units of work
pub trait Interrupt {
    fn is_interrupted(&self) -> bool;
}

/// Shared cancellation flag, set from the Ctrl+C listener
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Interrupt for CancelToken {
    fn is_interrupted(&self) -> bool {
        self.is_cancelled()
    }
}

/// Cancel `token` when the process receives Ctrl+C
/// The handler only flips the flag; the worker saves and exits
pub fn install_interrupt_handler(token: &CancelToken) -> Result<()> {
    let token = token.clone();
    ctrlc::set_handler(move || {
        if !token.is_cancelled() {
            log::warn!("ctrl+c received, saving...");
        }
        token.cancel();
    })?;
    Ok(())
}
