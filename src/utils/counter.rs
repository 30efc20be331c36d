//! A simple counter for tracking edits made during a run.
use crate::types::*;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

/// A counter for tracking edits made during a run.
pub struct Counter {
    updated: AtomicUsize,
    deleted: AtomicUsize,
    skipped: AtomicUsize,
    warning: AtomicUsize,
}

impl Counter {
    /// Creates a new Counter instance.
    pub fn new() -> Self {
        Self {
            updated: AtomicUsize::new(0),
            deleted: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
            warning: AtomicUsize::new(0),
        }
    }

    /// Increments the count of warnings.
    pub fn inc_warning(&self) {
        self.warning.fetch_add(1, SeqCst);
    }

    /// Increments the count for an edit outcome.
    pub fn inc(&self, result: EditResult) {
        match result {
            EditResult::Updated => {
                self.updated.fetch_add(1, SeqCst);
            }
            EditResult::Deleted => {
                self.deleted.fetch_add(1, SeqCst);
            }
            EditResult::Skipped => {
                self.skipped.fetch_add(1, SeqCst);
            }
        }
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Updated: {}, Deleted: {}, Skipped: {}, Warning: {}",
            self.updated.load(SeqCst),
            self.deleted.load(SeqCst),
            self.skipped.load(SeqCst),
            self.warning.load(SeqCst),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_summary() {
        let counter = Counter::new();
        counter.inc(EditResult::Updated);
        counter.inc(EditResult::Updated);
        counter.inc(EditResult::Deleted);
        counter.inc(EditResult::Skipped);
        counter.inc_warning();
        assert_eq!(
            counter.to_string(),
            "Updated: 2, Deleted: 1, Skipped: 1, Warning: 1"
        );
    }
}
