//! Progress reporting for transcript rendering.
//!
//! Rendering calls a [`ProgressCallback`] once per message, so callers can
//! drive a progress bar without polling.
//!
//! # Example
//!
//! ```rust
//! use chatconv::progress::{Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     if let Some(pct) = progress.percentage() {
//!         println!("Rendered {:.1}%", pct);
//!     }
//! });
//!
//! for i in 0..10usize {
//!     callback(Progress::new(i + 1, Some(10)));
//! }
//! ```

use std::sync::Arc;

/// Progress information for a rendering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of messages processed so far.
    pub items_processed: usize,

    /// Total messages to process, if known.
    pub total_items: Option<usize>,
}

impl Progress {
    /// Creates a new progress instance.
    pub fn new(items_processed: usize, total_items: Option<usize>) -> Self {
        Self {
            items_processed,
            total_items,
        }
    }

    /// Returns the progress as a percentage (0.0 - 100.0).
    ///
    /// Returns `None` if the total is not known.
    ///
    /// ```rust
    /// use chatconv::progress::Progress;
    ///
    /// assert_eq!(Progress::new(5, Some(10)).percentage(), Some(50.0));
    /// assert_eq!(Progress::new(5, None).percentage(), None);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> Option<f64> {
        self.total_items.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.items_processed as f64 / total as f64) * 100.0
            }
        })
    }

    /// Returns whether every known item has been processed.
    pub fn is_complete(&self) -> bool {
        self.total_items
            .map(|total| self.items_processed >= total)
            .unwrap_or(false)
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a progress callback that redraws a single status line on stderr.
///
/// Emits at most one update per whole percent, plus a final newline once the
/// pass completes.
pub fn stderr_progress(label: &'static str) -> ProgressCallback {
    Arc::new(move |progress| {
        let Some(total) = progress.total_items else {
            return;
        };
        let step = (total / 100).max(1);
        if progress.items_processed % step == 0 || progress.is_complete() {
            eprint!(
                "\r{}: {}/{} messages ({:.0}%)",
                label,
                progress.items_processed,
                total,
                progress.percentage().unwrap_or(100.0)
            );
        }
        if progress.is_complete() {
            eprintln!();
        }
    })
}
