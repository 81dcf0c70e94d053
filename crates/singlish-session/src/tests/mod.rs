mod worker;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::Convert;

/// Uppercases its input; handy for telling outputs apart without a rule table.
pub(super) struct Upper;

impl Convert for Upper {
    fn convert(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

/// Uppercases and counts how often it was asked to convert.
#[derive(Clone, Default)]
pub(super) struct Counting {
    calls: Arc<AtomicUsize>,
}

impl Counting {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Convert for Counting {
    fn convert(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        input.to_uppercase()
    }
}
